use std::fmt;

use serde::Serialize;

use crate::gql::queries::DeploifaiUser;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub username: String,
    pub is_team: bool,
}

impl Workspace {
    pub fn kind(&self) -> &'static str {
        if self.is_team {
            "TEAM"
        } else {
            "PERSONAL"
        }
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.username, self.kind())
    }
}

/// Personal account first, then every team account in response order.
pub fn workspaces(user: &DeploifaiUser) -> Vec<Workspace> {
    let personal = user.account.iter().map(|account| Workspace {
        id: account.id.clone(),
        username: account.username.clone(),
        is_team: false,
    });

    let teams = user
        .teams
        .iter()
        .flatten()
        .filter_map(|team| team.account.as_ref())
        .map(|account| Workspace {
            id: account.id.clone(),
            username: account.username.clone(),
            is_team: true,
        });

    personal.chain(teams).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gql::queries::get_user::ResponseData;
    use serde_json::json;

    fn user(value: serde_json::Value) -> DeploifaiUser {
        serde_json::from_value::<ResponseData>(json!({ "user": value }))
            .unwrap()
            .user
    }

    #[test]
    fn test_personal_workspace_comes_first() {
        let user = user(json!({
            "id": "u1",
            "account": { "id": "a1", "username": "ada" },
            "teams": [
                { "id": "t1", "account": { "id": "a2", "username": "lab" } },
                { "id": "t2", "account": { "id": "a3", "username": "ops" } }
            ]
        }));

        let names: Vec<_> = workspaces(&user)
            .into_iter()
            .map(|w| (w.username, w.is_team))
            .collect();
        assert_eq!(
            names,
            vec![
                ("ada".to_string(), false),
                ("lab".to_string(), true),
                ("ops".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_workspace_lines() {
        let user = user(json!({
            "id": "u1",
            "account": { "id": "a1", "username": "ada" },
            "teams": [{ "id": "t1", "account": { "id": "a2", "username": "lab" } }]
        }));

        let found = workspaces(&user);
        assert_eq!(found[0].kind(), "PERSONAL");
        assert_eq!(found[1].kind(), "TEAM");

        let lines: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["ada - PERSONAL", "lab - TEAM"]);
    }

    #[test]
    fn test_missing_accounts_are_skipped() {
        let user = user(json!({
            "id": "u1",
            "teams": [{ "id": "t1" }, { "id": "t2", "account": { "id": "a2", "username": "lab" } }]
        }));

        let found = workspaces(&user);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind(), "TEAM");
        assert_eq!(found[0].id, "a2");
    }

    #[test]
    fn test_no_workspaces() {
        assert!(workspaces(&user(json!({ "id": "u1" }))).is_empty());
    }

    #[test]
    fn test_workspace_json_shape() {
        let workspace = Workspace {
            id: "a1".into(),
            username: "ada".into(),
            is_team: false,
        };
        assert_eq!(
            serde_json::to_value(&workspace).unwrap(),
            json!({ "id": "a1", "username": "ada", "isTeam": false })
        );
    }
}
