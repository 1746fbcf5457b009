/// Computes the Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1. Distances are counted
/// in Unicode scalar values, not bytes, so `"café"` and `"cafe"` are one edit
/// apart. The full (n+1)×(m+1) table is filled; there is no early exit once a
/// bound is exceeded.
///
/// # Examples
///
/// ```rust
/// use folio::suggest::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("dune", "dune "), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    let width = m + 1;

    // table[i * width + j] = distance between a[..i] and b[..j]
    let mut table = vec![0usize; (n + 1) * width];
    for i in 0..=n {
        table[i * width] = i;
    }
    for j in 0..=m {
        table[j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let replace = table[(i - 1) * width + j - 1] + substitution;
            table[i * width + j] = deletion.min(insertion).min(replace);
        }
    }

    table[n * width + m]
}
