//! Base pairing table used for mRNA transcription

/// DNA base to the mRNA base it pairs with.
pub static MRNA_TRANSCRIPTION: [(char, char); 4] = [
    ('a', 'u'),
    ('t', 'a'),
    ('c', 'g'),
    ('g', 'c'),
];

/// Convert a lowercase DNA base to its corresponding mRNA base
pub fn dna_to_mrna(base: char) -> Option<char> {
    MRNA_TRANSCRIPTION
        .iter()
        .find(|(dna, _)| *dna == base)
        .map(|&(_, mrna)| mrna)
}
