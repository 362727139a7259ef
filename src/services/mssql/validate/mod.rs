//! Field validators applied while decoding configuration.
//!
//! Each validator takes the value and the path of the field it came from,
//! and reports a rejected value as [`ResourceError::Validation`].

use crate::resource::ResourceError;
use crate::services::mssql::parse::{JobAgentId, JobTargetGroupId};

const DATABASE_NAME_MAX_LEN: usize = 128;
const ELASTIC_POOL_NAME_MAX_LEN: usize = 128;
const SERVER_NAME_MAX_LEN: usize = 63;

const DATABASE_NAME_FORBIDDEN: &[char] = &['<', '>', '*', '%', '&', ':', '\\', '/', '?'];
const ELASTIC_POOL_NAME_FORBIDDEN: &[char] = &['&', '%', '\\', '/', '?'];

/// Checks that `value` parses as a job agent ID.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] carrying the parse error.
pub fn job_agent_id(value: &str, field: &str) -> Result<(), ResourceError> {
    JobAgentId::parse(value)
        .map(|_| ())
        .map_err(|e| ResourceError::validation(field, e.to_string()))
}

/// Checks that `value` parses as a job target group ID.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] carrying the parse error.
pub fn job_target_group_id(value: &str, field: &str) -> Result<(), ResourceError> {
    JobTargetGroupId::parse(value)
        .map(|_| ())
        .map_err(|e| ResourceError::validation(field, e.to_string()))
}

/// Checks a SQL server name: 1 to 63 lowercase letters, digits and hyphens,
/// not starting or ending with a hyphen.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if the name is rejected.
pub fn server_name(value: &str, field: &str) -> Result<(), ResourceError> {
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
    let valid = !value.is_empty()
        && value.len() <= SERVER_NAME_MAX_LEN
        && value.chars().all(allowed)
        && !value.starts_with('-')
        && !value.ends_with('-');

    if valid {
        return Ok(());
    }
    Err(ResourceError::validation(
        field,
        "can contain only lowercase letters, numbers, and '-', can't start or end with '-' and can not exceed 63 characters",
    ))
}

/// Checks a SQL database name: 1 to 128 characters, none of `<>*%&:\/?`,
/// not ending with a period or whitespace.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if the name is rejected.
pub fn database_name(value: &str, field: &str) -> Result<(), ResourceError> {
    if name_is_valid(value, DATABASE_NAME_MAX_LEN, DATABASE_NAME_FORBIDDEN) {
        return Ok(());
    }
    Err(ResourceError::validation(
        field,
        r"can't contain '<,>,*,%,&,:,\,/,?' or control characters, can't end with a period or whitespace and can not exceed 128 characters",
    ))
}

/// Checks a SQL elastic pool name: 1 to 128 characters, none of `&%\/?`,
/// not ending with a period or whitespace.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if the name is rejected.
pub fn elastic_pool_name(value: &str, field: &str) -> Result<(), ResourceError> {
    if name_is_valid(value, ELASTIC_POOL_NAME_MAX_LEN, ELASTIC_POOL_NAME_FORBIDDEN) {
        return Ok(());
    }
    Err(ResourceError::validation(
        field,
        r"can't contain '&,%,\,/,?' or control characters, can't end with a period or whitespace and can not exceed 128 characters",
    ))
}

fn name_is_valid(value: &str, max_len: usize, forbidden: &[char]) -> bool {
    let count = value.chars().count();
    if count == 0 || count > max_len {
        return false;
    }
    if value.chars().any(|c| forbidden.contains(&c)) {
        return false;
    }
    value
        .chars()
        .last()
        .is_some_and(|c| c != '.' && !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_name() {
        let max = "a".repeat(63);
        let valid = ["s", "server1", "my-sql-server", "0abc", max.as_str()];
        for name in valid {
            assert!(server_name(name, "server_name").is_ok(), "{name:?}");
        }

        let too_long = "a".repeat(64);
        let invalid = ["", "-server", "server-", "Server", "my_server", "srv.1", too_long.as_str()];
        for name in invalid {
            assert!(server_name(name, "server_name").is_err(), "{name:?}");
        }
    }

    #[test]
    fn test_database_name() {
        let max = "d".repeat(128);
        let valid = ["db", "My Database", "db.v2", "data-base_1", max.as_str()];
        for name in valid {
            assert!(database_name(name, "database_name").is_ok(), "{name:?}");
        }

        let too_long = "d".repeat(129);
        let invalid = ["", "db.", "db ", "a<b", "a*b", "a:b", "a/b", r"a\b", "a?b", too_long.as_str()];
        for name in invalid {
            assert!(database_name(name, "database_name").is_err(), "{name:?}");
        }
    }

    #[test]
    fn test_elastic_pool_name() {
        let valid = ["pool", "pool<1>", "pool:a", "pool*"];
        for name in valid {
            assert!(elastic_pool_name(name, "elastic_pool_name").is_ok(), "{name:?}");
        }

        let invalid = ["", "pool.", "pool\t", "a&b", "a%b", "a/b", r"a\b", "a?b"];
        for name in invalid {
            assert!(elastic_pool_name(name, "elastic_pool_name").is_err(), "{name:?}");
        }
    }

    #[test]
    fn test_errors_name_the_field() {
        let err = server_name("BAD", "target.2.server_name").unwrap_err();
        assert!(err.to_string().starts_with("target.2.server_name: "));
    }

    #[test]
    fn test_id_validators() {
        let agent = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Sql/servers/srv/jobAgents/agent";
        assert!(job_agent_id(agent, "job_agent_id").is_ok());
        assert!(job_agent_id("/subscriptions/sub", "job_agent_id").is_err());

        let group = format!("{agent}/targetGroups/tg");
        assert!(job_target_group_id(&group, "id").is_ok());
        assert!(job_target_group_id(agent, "id").is_err());

        let err = job_agent_id("not-an-id", "job_agent_id").unwrap_err();
        assert!(matches!(err, ResourceError::Validation { ref field, .. } if field == "job_agent_id"));
    }
}
