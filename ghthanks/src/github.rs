use crate::error::Result;
use crate::git::RepoName;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const MEMBERS_PER_PAGE: u8 = 100;

/// Read-only client for the handful of routes the changelog needs
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

/// A user, bot or organization account as embedded in API responses
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub organization: Option<Account>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub login: String,
    #[serde(default)]
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    /// The GitHub account linked to the commit author, if any
    #[serde(default)]
    pub author: Option<Account>,
    #[serde(default)]
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let builder = Octocrab::builder().base_uri(base_url)?;
        let octocrab = match token {
            Some(token) => builder.personal_token(token).build()?,
            None => builder.build()?,
        };

        Ok(Self { octocrab })
    }

    /// `GET /repos/{owner}/{name}`
    pub async fn get_repo(&self, repo: &RepoName) -> Result<RepositoryInfo> {
        let route = format!("/repos/{}/{}", repo.owner, repo.name);
        tracing::debug!("GET {}", route);
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    /// `GET /orgs/{org}`
    pub async fn get_organization(&self, org: &str) -> Result<Organization> {
        let route = format!("/orgs/{org}");
        tracing::debug!("GET {}", route);
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    /// `GET /orgs/{org}/members`, following pages until a short one comes back
    pub async fn list_members(&self, org: &str) -> Result<Vec<Account>> {
        let route = format!("/orgs/{org}/members");
        let mut members = Vec::new();
        let mut page = 1;

        loop {
            tracing::debug!("GET {} (page {})", route, page);
            let params = PageParams {
                per_page: MEMBERS_PER_PAGE,
                page,
            };
            let batch: Vec<Account> = self.octocrab.get(&route, Some(&params)).await?;
            let last_page = batch.len() < usize::from(MEMBERS_PER_PAGE);
            members.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(members)
    }

    /// `GET /repos/{owner}/{name}/commits/{sha}`
    pub async fn get_commit(&self, repo: &RepoName, sha: &str) -> Result<CommitInfo> {
        let route = format!("/repos/{}/{}/commits/{sha}", repo.owner, repo.name);
        tracing::debug!("GET {}", route);
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }
}
