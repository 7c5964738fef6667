use std::collections::HashSet;

use indexmap::IndexMap;

use crate::entry::{Definition, Entry, License, Meaning, Phonetic};
use crate::raw::{RawDefinition, RawEntry};

/// How many definitions a merged meaning keeps.
pub const MAX_DEFINITIONS: usize = 3;
/// How many synonyms and how many antonyms a merged meaning keeps.
pub const MAX_SYNONYMS_ANTONYMS: usize = 4;

/// Folds every raw entry the API returned for a word into one merged
/// entry: phonetics deduplicated, meanings grouped by part of speech
/// in first-seen order, identical definitions merged, synonym and
/// antonym lists unioned and capped.
///
/// Word, license and source URLs come from the first entry; phonetic
/// and origin are the first non-empty ones across all entries.
pub fn merge_entries(entries: Vec<RawEntry>) -> Entry {
    let word = entries
        .first()
        .map(|entry| entry.word.clone())
        .unwrap_or_default();
    let license = entries
        .first()
        .and_then(|entry| entry.license.clone())
        .map(|license| License {
            name: license.name,
            url: license.url,
        })
        .unwrap_or_default();
    let source_urls = entries
        .first()
        .map(|entry| entry.source_urls.clone())
        .unwrap_or_default();
    let phonetic = first_non_empty(entries.iter().map(|entry| entry.phonetic.as_deref()));
    let origin = first_non_empty(entries.iter().map(|entry| entry.origin.as_deref()));
    let phonetics = dedup_phonetics(&entries);

    let mut groups: IndexMap<String, MeaningAccumulator> = IndexMap::new();
    for entry in entries {
        for meaning in entry.meanings {
            let group = groups.entry(meaning.part_of_speech).or_default();
            for definition in meaning.definitions {
                group.fold_definition(definition);
            }
            group.synonyms.extend(meaning.synonyms);
            group.antonyms.extend(meaning.antonyms);
        }
    }
    let meanings = groups
        .into_iter()
        .map(|(part_of_speech, group)| group.finish(part_of_speech))
        .collect();

    Entry {
        word,
        phonetic,
        phonetics,
        origin,
        meanings,
        license,
        source_urls,
    }
}

/// Concatenates every entry's phonetics in order and keeps the first
/// occurrence of each (text, audio) pair. Two phonetics are duplicates
/// only when both fields match, absent included.
fn dedup_phonetics(entries: &[RawEntry]) -> Vec<Phonetic> {
    let mut seen: HashSet<(Option<&str>, Option<&str>)> = HashSet::new();
    let mut kept = Vec::new();
    for phonetic in entries.iter().flat_map(|entry| &entry.phonetics) {
        if seen.insert((phonetic.text.as_deref(), phonetic.audio.as_deref())) {
            kept.push(Phonetic {
                text: phonetic.text.clone(),
                audio: phonetic.audio.clone(),
            });
        }
    }
    kept
}

fn first_non_empty<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Option<String> {
    values
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Everything collected for one part of speech while entries are
/// folded in. Definitions are merged as they stream in; the meaning
/// level synonym/antonym union is finished afterwards.
#[derive(Debug, Default)]
struct MeaningAccumulator {
    definitions: Vec<DefinitionAccumulator>,
    synonyms: DedupList,
    antonyms: DedupList,
}

impl MeaningAccumulator {
    /// Merges one incoming definition. Identical definition text means
    /// the same definition: its synonyms and antonyms are unioned in
    /// and a missing example is backfilled. The first seen example is
    /// never replaced.
    fn fold_definition(&mut self, raw: RawDefinition) {
        match self
            .definitions
            .iter_mut()
            .find(|existing| existing.definition == raw.definition)
        {
            Some(existing) => {
                existing.synonyms.extend(raw.synonyms);
                existing.antonyms.extend(raw.antonyms);
                if existing.example.is_none() {
                    existing.example = raw.example;
                }
            }
            None => {
                // A raw definition's own lists may repeat themselves.
                let mut synonyms = DedupList::default();
                synonyms.extend(raw.synonyms);
                let mut antonyms = DedupList::default();
                antonyms.extend(raw.antonyms);
                self.definitions.push(DefinitionAccumulator {
                    definition: raw.definition,
                    example: raw.example,
                    synonyms,
                    antonyms,
                });
            }
        }
    }

    fn finish(self, part_of_speech: String) -> Meaning {
        Meaning {
            part_of_speech,
            definitions: self
                .definitions
                .into_iter()
                .take(MAX_DEFINITIONS)
                .map(DefinitionAccumulator::finish)
                .collect(),
            synonyms: self.synonyms.into_capped(MAX_SYNONYMS_ANTONYMS),
            antonyms: self.antonyms.into_capped(MAX_SYNONYMS_ANTONYMS),
        }
    }
}

#[derive(Debug)]
struct DefinitionAccumulator {
    definition: String,
    example: Option<String>,
    synonyms: DedupList,
    antonyms: DedupList,
}

impl DefinitionAccumulator {
    fn finish(self) -> Definition {
        Definition {
            definition: self.definition,
            example: self.example,
            synonyms: self.synonyms.into_vec(),
            antonyms: self.antonyms.into_vec(),
        }
    }
}

/// Insert-if-absent accumulator: a hash set for membership plus an
/// ordered list for output, so the union keeps first-occurrence order.
#[derive(Debug, Default)]
struct DedupList {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl DedupList {
    fn extend(&mut self, values: impl IntoIterator<Item = String>) {
        for value in values {
            if self.seen.insert(value.clone()) {
                self.items.push(value);
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// Prefix cut, never a reorder.
    fn into_capped(self, cap: usize) -> Vec<String> {
        let mut items = self.items;
        items.truncate(cap);
        items
    }
}
