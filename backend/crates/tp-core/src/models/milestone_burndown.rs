use crate::BurndownPoint;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A member of a milestone's burndown paired with its chart color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurndownMember {
    pub name: String,
    pub color: String,
}

/// Daily remaining-work series for one milestone, stacked by member.
///
/// Member names and colors live in a single list so their pairing cannot
/// drift. On the wire they are split into the parallel `memberNames` and
/// `memberColors` arrays that chart renderers expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneBurndown {
    pub title: String,
    pub number: u64,
    pub total_issues: usize,
    pub members: Vec<BurndownMember>,
    pub data_points: Vec<BurndownPoint>,
    pub due_date: Option<String>,
}

impl MilestoneBurndown {
    /// The burndown of a milestone with no issues.
    pub fn empty(title: impl Into<String>, number: u64, due_date: Option<String>) -> Self {
        Self {
            title: title.into(),
            number,
            total_issues: 0,
            members: Vec::new(),
            data_points: Vec::new(),
            due_date,
        }
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn member_colors(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.color.as_str()).collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MilestoneBurndownRef<'a> {
    title: &'a str,
    number: u64,
    total_issues: usize,
    member_names: Vec<&'a str>,
    member_colors: Vec<&'a str>,
    data_points: &'a [BurndownPoint],
    due_date: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MilestoneBurndownOwned {
    title: String,
    number: u64,
    total_issues: usize,
    #[serde(default)]
    member_names: Vec<String>,
    #[serde(default)]
    member_colors: Vec<String>,
    #[serde(default)]
    data_points: Vec<BurndownPoint>,
    #[serde(default)]
    due_date: Option<String>,
}

impl Serialize for MilestoneBurndown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MilestoneBurndownRef {
            title: &self.title,
            number: self.number,
            total_issues: self.total_issues,
            member_names: self.member_names(),
            member_colors: self.member_colors(),
            data_points: &self.data_points,
            due_date: self.due_date.as_deref(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MilestoneBurndown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let owned = MilestoneBurndownOwned::deserialize(deserializer)?;

        if owned.member_names.len() != owned.member_colors.len() {
            return Err(serde::de::Error::custom(format!(
                "memberNames has {} entries but memberColors has {}",
                owned.member_names.len(),
                owned.member_colors.len()
            )));
        }

        let members = owned
            .member_names
            .into_iter()
            .zip(owned.member_colors)
            .map(|(name, color)| BurndownMember { name, color })
            .collect();

        Ok(Self {
            title: owned.title,
            number: owned.number,
            total_issues: owned.total_issues,
            members,
            data_points: owned.data_points,
            due_date: owned.due_date,
        })
    }
}
