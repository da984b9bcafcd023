//! Deciding which collection each word of a bag of words belongs to

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::language::Issue;

/// Candidate words per collection. Collections keep the order in which they
/// were first seen, which is the order every issue raised about them
/// follows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionWords {
    entries: Vec<(String, BTreeSet<String>)>,
}

impl CollectionWords {
    pub fn new() -> CollectionWords {
        CollectionWords::default()
    }

    /// The word set of a collection, created empty if the collection is not
    /// yet present.
    pub fn entry(&mut self, collection_id: &str) -> &mut BTreeSet<String> {
        let index = match self.position(collection_id) {
            Some(index) => index,
            None => {
                self.entries
                    .push((collection_id.to_string(), BTreeSet::new()));
                self.entries
                    .len()
                    - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn insert(&mut self, collection_id: &str, word: &str) {
        self.entry(collection_id)
            .insert(word.to_string());
    }

    pub fn get(&self, collection_id: &str) -> Option<&BTreeSet<String>> {
        self.position(collection_id)
            .map(|index| &self.entries[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|(id, words)| (id.as_str(), words))
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }

    fn position(&self, collection_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(id, _)| id == collection_id)
    }

    fn words(&self, index: usize) -> &BTreeSet<String> {
        &self.entries[index].1
    }

    fn single_word(&self, index: usize) -> Option<&String> {
        let words = self.words(index);
        if words.len() == 1 {
            words
                .iter()
                .next()
        } else {
            None
        }
    }

    /// Remove `word` from every collection except those at `keep`.
    fn strip(&mut self, word: &str, keep: &[usize]) {
        for (index, (_, words)) in self
            .entries
            .iter_mut()
            .enumerate()
        {
            if !keep.contains(&index) {
                words.remove(word);
            }
        }
    }
}

impl<S, I> FromIterator<(S, I)> for CollectionWords
where
    S: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let mut result = CollectionWords::new();
        for (collection_id, words) in iter {
            let entry = result.entry(collection_id.as_ref());
            for word in words {
                entry.insert(
                    word.as_ref()
                        .to_string(),
                );
            }
        }
        result
    }
}

/// Groups of collections whose word sets overlap, directly or through other
/// collections. Each group lists collection indices in insertion order;
/// groups are ordered by their first member. Collections that overlap with
/// nothing are left out.
fn clusters(words: &CollectionWords) -> Vec<Vec<usize>> {
    let count = words.len();
    let mut parent: Vec<usize> = (0..count).collect();

    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for i in 0..count {
        for j in (i + 1)..count {
            if !words
                .words(i)
                .is_disjoint(words.words(j))
            {
                let a = root(&mut parent, i);
                let b = root(&mut parent, j);
                if a != b {
                    parent[a.max(b)] = a.min(b);
                }
            }
        }
    }

    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    for i in 0..count {
        let r = root(&mut parent, i);
        match groups
            .iter_mut()
            .find(|(key, _)| *key == r)
        {
            Some((_, members)) => members.push(i),
            None => groups.push((r, vec![i])),
        }
    }

    groups
        .into_iter()
        .map(|(_, members)| members)
        .filter(|members| members.len() > 1)
        .collect()
}

fn retire(clusters: &mut [Vec<usize>], retired: &[usize]) {
    for cluster in clusters.iter_mut() {
        cluster.retain(|index| !retired.contains(index));
    }
}

/// Narrow down the candidate words of collections competing for the same
/// words. Returns the narrowed mapping and an `AssignedWord` warning for
/// every assignment made along the way.
///
/// Resolution repeats until nothing changes:
///
/// 1. Collections of a cluster left with the same single word cannot be
///    told apart. They keep that word, it is taken away from everyone
///    else, and they drop out of the resolution.
/// 2. A collection with a single word wins it.
/// 3. A collection with exactly one word no other member of its cluster
///    has wins that word.
///
/// Whatever is still ambiguous at the end is for
/// [`check_collection_words_mapping`] to report.
pub fn resolve_conflicts(mut words: CollectionWords) -> (CollectionWords, Vec<Issue>) {
    let mut warnings = Vec::new();
    let mut clusters = clusters(&words);

    loop {
        // 1. ties
        let mut ties: Vec<Vec<usize>> = Vec::new();
        for cluster in &clusters {
            let mut by_word: Vec<(&String, Vec<usize>)> = Vec::new();
            for &index in cluster {
                if let Some(word) = words.single_word(index) {
                    match by_word
                        .iter_mut()
                        .find(|(w, _)| *w == word)
                    {
                        Some((_, members)) => members.push(index),
                        None => by_word.push((word, vec![index])),
                    }
                }
            }
            ties.extend(
                by_word
                    .into_iter()
                    .map(|(_, members)| members)
                    .filter(|members| members.len() > 1),
            );
        }

        if !ties.is_empty() {
            for tie in &ties {
                let word = match words.single_word(tie[0]) {
                    Some(word) => word.clone(),
                    None => continue,
                };
                debug!("{} collections tie for word {}", tie.len(), word);
                words.strip(&word, tie);
                retire(&mut clusters, tie);
            }
            continue;
        }

        // 2. collections down to a single word
        let winners: Vec<(usize, String)> = clusters
            .iter()
            .flatten()
            .filter_map(|&index| {
                words
                    .single_word(index)
                    .map(|word| (index, word.clone()))
            })
            .collect();

        if !winners.is_empty() {
            assign(&mut words, &mut clusters, &winners, &mut warnings);
            continue;
        }

        // 3. collections with exactly one word of their own
        let mut winners: Vec<(usize, String)> = Vec::new();
        for cluster in &clusters {
            for &index in cluster {
                let others: BTreeSet<&String> = cluster
                    .iter()
                    .filter(|&&other| other != index)
                    .flat_map(|&other| words.words(other))
                    .collect();
                let own: Vec<&String> = words
                    .words(index)
                    .iter()
                    .filter(|word| !others.contains(word))
                    .collect();
                if let [word] = own.as_slice() {
                    winners.push((index, (*word).clone()));
                }
            }
        }

        if !winners.is_empty() {
            for (index, word) in &winners {
                let entry = &mut words.entries[*index].1;
                entry.clear();
                entry.insert(word.clone());
            }
            assign(&mut words, &mut clusters, &winners, &mut warnings);
            continue;
        }

        break;
    }

    (words, warnings)
}

fn assign(
    words: &mut CollectionWords,
    clusters: &mut [Vec<usize>],
    winners: &[(usize, String)],
    warnings: &mut Vec<Issue>,
) {
    let indices: Vec<usize> = winners
        .iter()
        .map(|(index, _)| *index)
        .collect();

    for (index, word) in winners {
        let collection_id = words.entries[*index]
            .0
            .clone();
        debug!("Assigning word {} to collection {}", word, collection_id);
        words.strip(word, &indices);
        warnings.push(Issue::AssignedWord {
            collection_id,
            word: word.clone(),
        });
    }

    retire(clusters, &indices);
}

/// Turn resolved candidates into a collection to word mapping. Collections
/// with exactly the same words are reported as conflicting and left out, as
/// are collections still holding more than one word. Collections with no
/// word left are dropped silently.
pub fn check_collection_words_mapping(
    words: CollectionWords,
) -> (BTreeMap<String, String>, Vec<Issue>) {
    let mut errors = Vec::new();

    let mut groups: Vec<(&BTreeSet<String>, Vec<&str>)> = Vec::new();
    for (collection_id, set) in words.iter() {
        if set.is_empty() {
            continue;
        }
        match groups
            .iter_mut()
            .find(|(existing, _)| *existing == set)
        {
            Some((_, members)) => members.push(collection_id),
            None => groups.push((set, vec![collection_id])),
        }
    }

    let mut conflicting: BTreeSet<&str> = BTreeSet::new();
    for (set, members) in &groups {
        if members.len() > 1 {
            errors.push(Issue::ConflictingCollections {
                collection_ids: members
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
                words: set
                    .iter()
                    .cloned()
                    .collect(),
            });
            conflicting.extend(members.iter());
        }
    }

    let mut mapping = BTreeMap::new();
    for (collection_id, set) in words.iter() {
        if conflicting.contains(collection_id) {
            continue;
        }
        match set.len() {
            0 => {}
            1 => {
                if let Some(word) = set
                    .iter()
                    .next()
                {
                    mapping.insert(collection_id.to_string(), word.clone());
                }
            }
            _ => errors.push(Issue::TooManyWordsCollection {
                collection_id: collection_id.to_string(),
                words: set
                    .iter()
                    .cloned()
                    .collect(),
            }),
        }
    }

    (mapping, errors)
}
