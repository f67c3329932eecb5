use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use super::table::{join_objects, Table};
use crate::core::Object;
use crate::store::{Predicates, StatementStore};

pub const COLLECTION_ID_HEADER: &str = "Collection ID";
pub const MEMBERS_HEADER: &str = "Members";

fn member_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^http://www\.w3\.org/1999/02/22-rdf-syntax-ns#_([1-9][0-9]*)$")
            .expect("container membership pattern is valid")
    })
}

/// Position encoded by a container membership predicate such as `rdf:_3`.
///
/// Returns `None` for any other predicate, including `rdf:type`. A membership
/// predicate whose index does not fit in a `u64` is logged and also yields
/// `None`.
pub fn member_index(predicate: &str) -> Option<u64> {
    let caps = member_pattern().captures(predicate)?;
    match caps[1].parse() {
        Ok(index) => Some(index),
        Err(e) => {
            warn!("Membership predicate {} has an unusable index ({}), skipping its member", predicate, e);
            None
        }
    }
}

/// Members of a bag in ascending member index order.
///
/// Sorting is numeric, so `rdf:_2` precedes `rdf:_10`. Only the first object
/// of each membership predicate is kept; extra objects are logged and dropped.
pub fn flatten_bag(predicates: &Predicates) -> Vec<Object> {
    let mut members: Vec<(u64, &Object)> = Vec::new();

    for (predicate, objects) in predicates.iter() {
        let Some(index) = member_index(predicate) else {
            continue;
        };
        let Some(first) = objects.first() else {
            continue;
        };
        if objects.len() > 1 {
            warn!(
                "Membership predicate {} carries {} objects, keeping only the first",
                predicate,
                objects.len()
            );
        }
        members.push((index, first));
    }

    members.sort_by_key(|(index, _)| *index);
    members.into_iter().map(|(_, object)| object.clone()).collect()
}

/// Two-column report of every bag: its IRI and its joined member list.
///
/// Rows follow ascending collection IRI order.
pub fn collections_table(bags: &StatementStore) -> Table {
    let mut table = Table::new([COLLECTION_ID_HEADER, MEMBERS_HEADER]);
    for (subject, predicates) in bags.iter() {
        let members = flatten_bag(predicates);
        table.push_row(vec![subject.to_string(), join_objects(&members)]);
    }
    table
}
