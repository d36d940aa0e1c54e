// src/chat/resolver.rs
// Greedy substring/fuzzy matcher that picks at most one zone out of a
// candidate list for a free-text query.

/// Minimum normalized similarity for a fuzzy hit.
pub const FUZZY_CUTOFF: f64 = 0.6;

/// Resolve a zone name from free text. Three passes, first success wins:
/// exact case-insensitive substring, per-token fuzzy match, then whole-query
/// fuzzy match. Returns the candidate in its original casing, or `None` when
/// nothing clears the cutoff.
pub fn resolve(query: &str, candidates: &[String]) -> Option<String> {
    let query = query.to_lowercase();

    for candidate in candidates {
        if query.contains(&candidate.to_lowercase()) {
            return Some(candidate.clone());
        }
    }

    for token in query.split_whitespace() {
        if let Some(candidate) = closest_match(token, candidates, FUZZY_CUTOFF) {
            return Some(candidate);
        }
    }

    closest_match(&query, candidates, FUZZY_CUTOFF)
}

/// Nearest candidate by normalized similarity, or `None` when the best score
/// is below `cutoff`. Ties keep the earlier candidate.
pub fn closest_match(input: &str, candidates: &[String], cutoff: f64) -> Option<String> {
    let mut best: Option<(f64, &String)> = None;
    for candidate in candidates {
        let score = similarity(input, &candidate.to_lowercase());
        if score >= cutoff && best.map_or(true, |(top, _)| score > top) {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, candidate)| candidate.clone())
}

/// Normalized Levenshtein similarity in [0, 1].
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
