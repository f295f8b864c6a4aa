//! Hash table operations
//!
//! Every keyed operation starts the same way: compute the hash, locate the
//! bucket, then compare the chain's keys in order until one matches.

use super::unsupported;
use crate::command::{Command, StructureKind};
use crate::engine::errors::{CommandError, OpError};
use crate::engine::session::Session;
use crate::structures::hash_table::HashTable;
use crate::trace::{Locator, Outcome, Output, StepKind, Trace, TraceBuilder};

impl Session {
    pub(crate) fn run_table_command(&mut self, command: &Command) -> Result<Trace, CommandError> {
        let trace = match command {
            Command::Put { key, value } => self.table_put(key, value),
            Command::Get(key) => self.table_get(key),
            Command::Has(key) => self.table_has(key),
            Command::Remove(key) => self.table_remove(key),
            Command::Clear => {
                let mut builder = TraceBuilder::new("Clearing the hash table", &self.table);
                let count = self.table.len();
                self.table.clear();
                builder.apply(StepKind::Delete, "", Locator::None, format!("removed {} entries", count));
                builder.finish(&self.table, Outcome::ok(), Output::None)
            }
            other => return Err(unsupported(other, StructureKind::HashTable)),
        };
        Ok(trace)
    }

    fn table_put(&mut self, key: &str, value: &str) -> Trace {
        let mut builder = TraceBuilder::new(
            format!("Inserting key \"{}\" with value \"{}\"", key, value),
            &self.table,
        );
        let (bucket, existing) = self.table_probe(&mut builder, key);

        let result = self.table.insert(key, value.to_string());
        let locator = Locator::Bucket {
            index: result.bucket,
            slot: Some(result.slot),
        };
        if result.updated {
            let old = existing.unwrap_or_default();
            builder.apply(
                StepKind::Update,
                key,
                locator,
                format!("replace \"{}\" with \"{}\"", old, value),
            );
        } else {
            builder.apply(
                StepKind::Insert,
                key,
                locator,
                format!("append to bucket {} at slot {}", bucket, result.slot),
            );
        }
        builder.finish(&self.table, Outcome::ok(), Output::Bucket(result.bucket))
    }

    fn table_get(&mut self, key: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Looking up key \"{}\"", key), &self.table);
        let (bucket, existing) = self.table_probe(&mut builder, key);
        match existing {
            Some(value) => {
                builder.step(
                    StepKind::Found,
                    key,
                    self.table_locator(bucket, key),
                    format!("\"{}\" maps to \"{}\"", key, value),
                );
                builder.finish(&self.table, Outcome::ok(), Output::Text(value))
            }
            None => self.table_missing(builder, key, bucket),
        }
    }

    fn table_has(&mut self, key: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Checking for key \"{}\"", key), &self.table);
        let (bucket, existing) = self.table_probe(&mut builder, key);
        let present = existing.is_some();
        if present {
            builder.step(
                StepKind::Found,
                key,
                self.table_locator(bucket, key),
                format!("\"{}\" is present", key),
            );
        } else {
            builder.step(
                StepKind::NotFound,
                key,
                Locator::Bucket {
                    index: bucket,
                    slot: None,
                },
                format!("\"{}\" is not present", key),
            );
        }
        // A membership test always succeeds; the answer is the output
        builder.finish(&self.table, Outcome::ok(), Output::Flag(present))
    }

    fn table_remove(&mut self, key: &str) -> Trace {
        let mut builder = TraceBuilder::new(format!("Deleting key \"{}\"", key), &self.table);
        let (bucket, existing) = self.table_probe(&mut builder, key);
        if existing.is_none() {
            return self.table_missing(builder, key, bucket);
        }

        let locator = self.table_locator(bucket, key);
        self.table.delete(key);
        builder.remove(
            StepKind::Delete,
            key,
            locator,
            format!("unlink \"{}\" from bucket {}", key, bucket),
        );
        builder.finish(&self.table, Outcome::ok(), Output::Flag(true))
    }

    /// Hash `key`, locate its bucket and compare the chain's keys in order.
    ///
    /// Returns the bucket index and the stored value when the key is present.
    fn table_probe(&self, builder: &mut TraceBuilder, key: &str) -> (usize, Option<String>) {
        let sum = HashTable::<String>::char_code_sum(key);
        let buckets = self.table.bucket_count();
        let index = self.table.hash(key);
        let bucket = Locator::Bucket { index, slot: None };

        builder.step(
            StepKind::HashComputed,
            key,
            bucket.clone(),
            format!(
                "sum of char codes of \"{}\" = {}, {} mod {} = {}",
                key, sum, sum, buckets, index
            ),
        );

        let chain = self.table.bucket(index);
        builder.step(
            StepKind::BucketLocated,
            key,
            bucket,
            match chain.len() {
                0 => format!("bucket {} is empty", index),
                1 => format!("bucket {} holds 1 entry", index),
                n => format!("bucket {} holds {} entries", index, n),
            },
        );

        for (slot, entry) in chain.iter().enumerate() {
            let matched = entry.key == key;
            builder.step(
                StepKind::Compare,
                entry.key.as_str(),
                Locator::Bucket {
                    index,
                    slot: Some(slot),
                },
                format!(
                    "\"{}\" {} \"{}\"",
                    entry.key,
                    if matched { "==" } else { "!=" },
                    key
                ),
            );
            if matched {
                return (index, Some(entry.value.clone()));
            }
        }
        (index, None)
    }

    fn table_locator(&self, index: usize, key: &str) -> Locator {
        Locator::Bucket {
            index,
            slot: self.table.slot_of(key),
        }
    }

    fn table_missing(&self, mut builder: TraceBuilder, key: &str, bucket: usize) -> Trace {
        let error = OpError::NotFound(format!("key \"{}\"", key));
        builder.step(
            StepKind::NotFound,
            key,
            Locator::Bucket {
                index: bucket,
                slot: None,
            },
            format!("\"{}\" is not in bucket {}", key, bucket),
        );
        builder.finish(&self.table, Outcome::failed(&error), Output::Absent)
    }
}
