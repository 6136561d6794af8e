//! Ingested snapshots
//!
//! Stores publish collections in whatever order they hold them. Ingestion puts
//! them into the canonical order every view relies on: orders newest first,
//! members by name.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::domain::{Member, MemberId, Order};

/// All orders at one instant, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSnapshot {
    orders: Vec<Order>,
}

impl OrderSnapshot {
    /// Sort by creation time, descending; equal timestamps keep store order
    pub fn new(mut orders: Vec<Order>) -> Self {
        orders.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { orders }
    }

    pub fn as_slice(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderSnapshot {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

/// All members at one instant, sorted by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSnapshot {
    members: Vec<Member>,
}

impl MemberSnapshot {
    /// Sort by name ignoring case first, then lowercase before uppercase;
    /// identical names keep store order
    pub fn new(mut members: Vec<Member>) -> Self {
        members.sort_by_cached_key(|member| {
            let name: &str = member.name.as_ref();
            (name.to_lowercase(), Reverse(name.to_string()))
        });
        Self { members }
    }

    pub fn as_slice(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Build the id lookup used for name resolution
    pub fn directory(&self) -> MemberDirectory<'_> {
        MemberDirectory::new(&self.members)
    }
}

/// Lookup-only relation from member id to member
///
/// Orders reference members weakly: a lookup miss is expected after a member
/// is deleted and callers substitute a fallback label.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory<'a> {
    by_id: HashMap<&'a MemberId, &'a Member>,
}

impl<'a> MemberDirectory<'a> {
    /// Index `members`; if ids repeat, the first occurrence wins
    pub fn new(members: &'a [Member]) -> Self {
        let mut by_id = HashMap::with_capacity(members.len());
        for member in members {
            by_id.entry(&member.id).or_insert(member);
        }
        Self { by_id }
    }

    pub fn lookup(&self, id: &MemberId) -> Option<&'a Member> {
        self.by_id.get(id).copied()
    }

    /// Display name for `id`, or `fallback` when the member is gone
    pub fn display_name<'f>(&self, id: &MemberId, fallback: &'f str) -> &'f str
    where
        'a: 'f,
    {
        self.lookup(id).map_or(fallback, |member| member.name.as_ref())
    }
}
