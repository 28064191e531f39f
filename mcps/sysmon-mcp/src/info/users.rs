//! User listing with an explicit fallback chain
//!
//! Sources are tried in order; the first one that answers with at least one
//! user wins and its name is recorded next to the list. A host where every
//! source answers with nobody gets an empty list; only a chain where every
//! source fails is an error.

use std::collections::BTreeMap;

use sysinfo::{System, Users};

use super::process::is_process;
use crate::error::{MonitorError, MonitorResult};
use crate::types::{UserEntry, UserList};

/// Something that can enumerate users on this host
pub trait UserSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn users(&self) -> MonitorResult<Vec<UserEntry>>;
}

/// Accounts that own at least one running process
pub struct ProcessOwners;

impl UserSource for ProcessOwners {
    fn name(&self) -> &'static str {
        "process-owners"
    }

    fn users(&self) -> MonitorResult<Vec<UserEntry>> {
        let sys = System::new_all();
        let accounts = Users::new_with_refreshed_list();

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for process in sys.processes().values().filter(|p| is_process(p)) {
            let owner = process
                .user_id()
                .and_then(|uid| accounts.get_user_by_id(uid));
            if let Some(user) = owner {
                *counts.entry(user.name().to_string()).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(name, count)| UserEntry {
                name,
                process_count: Some(count),
            })
            .collect())
    }
}

/// Every account the OS knows about
pub struct Accounts;

impl UserSource for Accounts {
    fn name(&self) -> &'static str {
        "accounts"
    }

    fn users(&self) -> MonitorResult<Vec<UserEntry>> {
        let accounts = Users::new_with_refreshed_list();
        let mut users: Vec<UserEntry> = accounts
            .iter()
            .map(|user| UserEntry {
                name: user.name().to_string(),
                process_count: None,
            })
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }
}

/// Sources in the order the host handler tries them
pub fn default_sources() -> Vec<Box<dyn UserSource>> {
    vec![Box::new(ProcessOwners), Box::new(Accounts)]
}

/// Ask each source in turn until one returns users
pub fn resolve(sources: &[Box<dyn UserSource>]) -> MonitorResult<UserList> {
    let mut last_error = None;
    let mut last_empty = None;

    for source in sources {
        match source.users() {
            Ok(users) if !users.is_empty() => {
                tracing::debug!(source = source.name(), count = users.len(), "resolved users");
                return Ok(UserList {
                    source: source.name().to_string(),
                    users,
                });
            }
            Ok(_) => {
                tracing::debug!(source = source.name(), "user source returned nobody");
                last_empty = Some(source.name());
            }
            Err(e) => {
                tracing::debug!(source = source.name(), error = %e, "user source failed");
                last_error = Some(e);
            }
        }
    }

    if let Some(source) = last_empty {
        return Ok(UserList {
            source: source.to_string(),
            users: Vec::new(),
        });
    }

    Err(last_error.unwrap_or_else(|| {
        MonitorError::unavailable("user information", "no user source returned any users")
    }))
}
