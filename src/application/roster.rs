//! Member roster maintenance
//!
//! Members are added in batches from free text and removed one at a time.
//! Removing a member leaves their past orders untouched; those orders keep
//! referring to an id that no longer resolves.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, instrument, warn};

use super::record_store::MemberStore;
use crate::domain::validation_constants::roster::NAME_SEPARATOR_PATTERN;
use crate::domain::{MemberId, MemberName, NewMember};
use crate::error::Result;
use crate::infrastructure::log_messages::roster as log;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NAME_SEPARATOR_PATTERN).unwrap_or_else(|e| panic!("invalid separator pattern: {e}"))
});

/// Split batch input into member names
///
/// Names are separated by runs of whitespace, commas or full-width commas.
/// Empty tokens vanish; tokens too long to be a member name are skipped.
pub fn parse_member_names(text: &str) -> Vec<MemberName> {
    SEPARATOR
        .split(text)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match MemberName::try_new(token.to_string()) {
            Ok(name) => Some(name),
            Err(error) => {
                warn!(token, %error, "{}", log::SKIPPED_NAME);
                None
            }
        })
        .collect()
}

/// Create one active member per name in `text`
///
/// Members are created in input order. The first failing create stops the
/// batch; members created before it stay created.
#[instrument(skip_all)]
pub async fn add_members(members: &MemberStore, text: &str) -> Result<Vec<MemberId>> {
    let names = parse_member_names(text);
    let mut created = Vec::with_capacity(names.len());

    for name in names {
        created.push(members.create(NewMember::new(name)).await?);
    }

    if !created.is_empty() {
        info!(count = created.len(), "{}", log::MEMBERS_ADDED);
    }
    Ok(created)
}

/// Delete one member record
#[instrument(skip(members))]
pub async fn remove_member(members: &MemberStore, id: &MemberId) -> Result<()> {
    members.delete(id).await?;
    info!("{}", log::MEMBER_REMOVED);
    Ok(())
}
