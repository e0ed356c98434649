use anyhow::{bail, Context, Result};
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Length of the literal `algo_` prefix carried by every team token.
const TEAM_PREFIX_LEN: usize = 5;

/// Fixed token positions within a list item's text.
const TIME_TOKEN: usize = 2;
const COMMIT_TOKEN: usize = 5;

/// One standings entry: a team, its elapsed time and the commit it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub team: String,
    pub time: i64,
    pub commit: String,
}

/// Records serialize as `[team, time, commit]`; the chart frontend indexes
/// them positionally.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.team)?;
        tuple.serialize_element(&self.time)?;
        tuple.serialize_element(&self.commit)?;
        tuple.end()
    }
}

/// Parse one list item's text into a record.
///
/// Items read `algo_<team> .. <time> .. (..<commit>)`: splitting on literal
/// spaces puts the team token at position 0, the elapsed time at 2 and the
/// commit hash at 5. Splitting keeps empty tokens, so runs of spaces in the
/// source markup shift nothing.
pub fn parse_record(raw: &str) -> Result<Record> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    if tokens.len() <= COMMIT_TOKEN {
        bail!(
            "Record '{}' has {} space-separated tokens, expected at least {}",
            raw,
            tokens.len(),
            COMMIT_TOKEN + 1
        );
    }

    let team = tokens[0].get(TEAM_PREFIX_LEN..).unwrap_or_default();
    let time = tokens[TIME_TOKEN].parse::<i64>().with_context(|| {
        format!(
            "Record '{}' has a non-numeric time '{}'",
            raw, tokens[TIME_TOKEN]
        )
    })?;
    let commit = tokens[COMMIT_TOKEN].trim_end_matches(')');

    Ok(Record {
        team: team.to_string(),
        time,
        commit: commit.to_string(),
    })
}
