use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Company,
    Candidate,
    Other(String),
    #[default]
    None,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "company" => Role::Company,
            "candidate" => Role::Candidate,
            "" => Role::None,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Company => "company".to_string(),
            Role::Candidate => "candidate".to_string(),
            Role::Other(s) => s,
            Role::None => String::new(),
        }
    }
}

impl Role {
    pub fn is_empty(&self) -> bool {
        matches!(self, Role::None)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// The signed-in user as returned by `GET /auth/me`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyProfile>,
}

impl CurrentUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Company accounts show the company's image when one is set.
    pub fn avatar(&self) -> Option<&str> {
        let own = self.profile_image.as_deref().filter(|s| !s.is_empty());
        if self.role != Role::Company {
            return own;
        }
        self.company
            .as_ref()
            .and_then(|company| company.profile_image.as_deref())
            .filter(|s| !s.is_empty())
            .or(own)
    }

    pub fn company_slug(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|company| company.slug.as_deref())
            .filter(|s| !s.is_empty())
    }
}
