use crate::error::{Error, Result};
use crate::github::DEFAULT_API_URL;
use crate::job::profile::{
    DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, DEFAULT_RAW_URL, DEFAULT_README_PATH,
};
use crate::job::{ProfileOptions, VisualizeOptions};
use crate::model::Repository;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Parser, Debug, Clone)]
#[command(name = "activity-profile", version, about = "Render coding activity charts and publish them on a profile README")]
pub struct Cli {
    #[arg(long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Render heatmap, project and code quality charts from activity logs")]
    Visualize(VisualizeArgs),
    #[command(about = "Rewrite the profile README so it embeds the published charts")]
    UpdateProfile(ProfileArgs),
    #[command(about = "Run `visualize` and then `update-profile`")]
    All {
        #[command(flatten)]
        visualize: VisualizeArgs,
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct VisualizeArgs {
    #[arg(long = "projects-dir", default_value = "projects")]
    pub projects_dir: PathBuf,
    #[arg(long = "output-dir", default_value = "visualizations")]
    pub output_dir: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long, env = REPOSITORY_ENV, help = "Repository holding the charts, as `owner/name`")]
    pub repository: Option<String>,
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    #[arg(long = "raw-url", default_value = DEFAULT_RAW_URL)]
    pub raw_url: String,
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,
    #[arg(long = "charts-dir", default_value = "visualizations")]
    pub charts_dir: String,
    #[arg(long = "profile-repo", help = "Repository receiving the README [default: <user>/<user>]")]
    pub profile_repo: Option<String>,
    #[arg(long = "readme-path", default_value = DEFAULT_README_PATH)]
    pub readme_path: String,
    #[arg(long = "message", default_value = DEFAULT_COMMIT_MESSAGE)]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub api_url: String,
    pub token: String,
    pub options: ProfileOptions,
}

impl VisualizeArgs {
    pub fn options(&self) -> VisualizeOptions {
        VisualizeOptions {
            projects_dir: self.projects_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

impl ProfileArgs {
    pub fn resolve(&self) -> Result<ProfileConfig> {
        let repository = required(&self.repository, REPOSITORY_ENV)?.parse::<Repository>()?;
        let token = required(&self.token, TOKEN_ENV)?.to_string();
        let profile_repo = self
            .profile_repo
            .as_deref()
            .map(str::parse::<Repository>)
            .transpose()?;
        Ok(ProfileConfig {
            api_url: self.api_url.clone(),
            token,
            options: ProfileOptions {
                repository,
                profile_repo,
                raw_base_url: self.raw_url.clone(),
                branch: self.branch.clone(),
                charts_dir: self.charts_dir.clone(),
                readme_path: self.readme_path.clone(),
                commit_message: self.message.clone(),
            },
        })
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingConfig(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_args() -> ProfileArgs {
        ProfileArgs {
            repository: Some("octo/activity".to_string()),
            token: Some("secret".to_string()),
            api_url: DEFAULT_API_URL.to_string(),
            raw_url: DEFAULT_RAW_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            charts_dir: "visualizations".to_string(),
            profile_repo: None,
            readme_path: DEFAULT_README_PATH.to_string(),
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }

    #[test]
    fn parses_visualize_defaults() {
        let cli = Cli::try_parse_from(["activity-profile", "visualize"]).expect("parse");
        let Command::Visualize(args) = cli.command else {
            panic!("expected visualize");
        };
        assert_eq!(args.projects_dir, PathBuf::from("projects"));
        assert_eq!(args.output_dir, PathBuf::from("visualizations"));
    }

    #[test]
    fn parses_all_with_flags() {
        let cli = Cli::try_parse_from([
            "activity-profile",
            "all",
            "--quiet",
            "--projects-dir",
            "logs",
            "--repository",
            "octo/activity",
            "--token",
            "t",
            "--profile-repo",
            "octo/profile",
        ])
        .expect("parse");
        assert!(cli.quiet);
        let Command::All { visualize, profile } = cli.command else {
            panic!("expected all");
        };
        assert_eq!(visualize.projects_dir, PathBuf::from("logs"));
        let config = profile.resolve().expect("resolve");
        assert_eq!(config.token, "t");
        assert_eq!(
            config.options.profile_repo,
            Some(Repository::new("octo", "profile"))
        );
    }

    #[test]
    fn missing_token_is_fatal() {
        let args = ProfileArgs {
            token: None,
            ..profile_args()
        };
        assert!(matches!(
            args.resolve(),
            Err(Error::MissingConfig(TOKEN_ENV))
        ));
        let args = ProfileArgs {
            token: Some("  ".to_string()),
            ..profile_args()
        };
        assert!(matches!(
            args.resolve(),
            Err(Error::MissingConfig(TOKEN_ENV))
        ));
    }

    #[test]
    fn missing_or_malformed_repository_is_fatal() {
        let args = ProfileArgs {
            repository: None,
            ..profile_args()
        };
        assert!(matches!(
            args.resolve(),
            Err(Error::MissingConfig(REPOSITORY_ENV))
        ));
        let args = ProfileArgs {
            repository: Some("not-a-repo".to_string()),
            ..profile_args()
        };
        assert!(matches!(args.resolve(), Err(Error::InvalidRepository(_))));
    }

    #[test]
    fn resolves_options() {
        let config = profile_args().resolve().expect("resolve");
        assert_eq!(config.options.repository, Repository::new("octo", "activity"));
        assert_eq!(config.options.profile_repo, None);
        assert_eq!(config.options.readme_path, "README.md");
    }
}
