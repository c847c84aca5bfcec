use strsim::levenshtein;

/// Find the most similar name from a list of candidates
pub fn find_similar_name<S: AsRef<str>>(target: &str, candidates: &[S]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (candidate.as_ref(), levenshtein(target, candidate.as_ref())))
        // Only suggest if distance is small (1-2 character difference)
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name.to_string())
}
