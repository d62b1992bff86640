use crate::error::Result;
use crate::github::ContentStore;
use crate::model::Repository;
use crate::report::markdown::{ChartLinks, MarkdownReport, ProfileReadme};
use crate::utils::StepProgress;
use chrono::NaiveDate;
use tracing::info;

pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update profile README";

#[derive(Debug, Clone)]
pub struct ProfileOptions {
    pub repository: Repository,
    // `{user}/{user}` when unset
    pub profile_repo: Option<Repository>,
    pub raw_base_url: String,
    pub branch: String,
    pub charts_dir: String,
    pub readme_path: String,
    pub commit_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    Created { revision: String },
    Updated { revision: String },
    Unchanged { revision: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: String,
    pub target: Repository,
    pub outcome: ProfileOutcome,
}

pub async fn update_profile<S: ContentStore>(
    store: &S,
    options: &ProfileOptions,
    today: NaiveDate,
    progress: &StepProgress,
) -> Result<ProfileUpdate> {
    let identity_pb = progress.timed_step("Resolving identity ...");
    let username = store
        .resolve_identity()
        .await
        .inspect_err(|err| identity_pb.abandon_with_message(format!("❌ {err}")))?;
    identity_pb.finish_with_message(format!("✅ Authenticated as `{username}`"));

    let readme = ProfileReadme {
        username: username.clone(),
        charts: ChartLinks::for_repository(
            &options.raw_base_url,
            &options.repository,
            &options.branch,
            &options.charts_dir,
        ),
        updated: today,
    };
    let content = readme.report_render()?;
    let target = options
        .profile_repo
        .clone()
        .unwrap_or_else(|| Repository::profile_of(&username));
    let path = options.readme_path.as_str();

    let file_pb = progress.timed_step(format!("Reading `{path}` from {target} ..."));
    let current = store
        .read_file(&target, path)
        .await
        .inspect_err(|err| file_pb.abandon_with_message(format!("❌ {err}")))?;

    if let Some(current) = current.as_ref().filter(|file| file.content == content) {
        file_pb.finish_with_message(format!("✅ `{path}` in {target} is already up to date"));
        info!(%target, path, "profile README unchanged");
        return Ok(ProfileUpdate {
            username,
            target,
            outcome: ProfileOutcome::Unchanged {
                revision: current.revision.clone(),
            },
        });
    }

    file_pb.set_message(format!("Writing `{path}` to {target} ..."));
    let expected_revision = current.as_ref().map(|file| file.revision.as_str());
    let revision = store
        .write_file(
            &target,
            path,
            &options.commit_message,
            &content,
            expected_revision,
        )
        .await
        .inspect_err(|err| file_pb.abandon_with_message(format!("❌ {err}")))?;
    file_pb.finish_with_message(format!("✅ Wrote `{path}` to {target}"));
    info!(%target, path, %revision, "profile README written");

    let outcome = match current {
        Some(_) => ProfileOutcome::Updated { revision },
        None => ProfileOutcome::Created { revision },
    };
    Ok(ProfileUpdate {
        username,
        target,
        outcome,
    })
}
