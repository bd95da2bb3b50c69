use derive_new::new;
use serde::Serialize;
use tracing::debug;

use crate::alphabet::ALPHABET_LEN;
use crate::ciphers::{shift_indices, to_indices};
use crate::error::CipherError;

#[derive(new, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub key: i64,
    pub text: String,
}

/// A ciphertext checked against the alphabet, ready to be decoded under every key.
#[derive(Debug, Clone)]
pub struct BruteForce {
    indices: Vec<usize>,
}

/// Tries every key on `ciphertext`. The right one isn't picked out; that's left to whoever reads them.
pub fn brute_force_decode(ciphertext: &str) -> Result<BruteForce, CipherError> {
    let indices = to_indices(ciphertext)?;
    debug!(len = indices.len(), "brute forcing ciphertext");
    Ok(BruteForce { indices })
}

impl BruteForce {
    pub fn candidates(&self) -> CandidateCursor<'_> {
        CandidateCursor { key: 0, indices: &self.indices }
    }
}

impl<'a> IntoIterator for &'a BruteForce {
    type Item = Candidate;
    type IntoIter = CandidateCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates()
    }
}

#[derive(Debug, Clone)]
pub struct CandidateCursor<'a> {
    key: usize,
    indices: &'a [usize],
}

impl<'a> Iterator for CandidateCursor<'a> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.key >= ALPHABET_LEN {
            return None;
        }
        let key = self.key;
        self.key += 1;
        // shifting back by key is shifting forward by 26 - key
        let text = shift_indices(self.indices, (ALPHABET_LEN - key) % ALPHABET_LEN);
        Some(Candidate::new(key as i64, text))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = ALPHABET_LEN - self.key;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CandidateCursor<'_> {}

impl std::iter::FusedIterator for CandidateCursor<'_> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::ciphers::brute_force::{brute_force_decode, Candidate};
    use crate::ciphers::{decode, encode};
    use crate::error::CipherError;

    #[test]
    fn yields_26_candidates_in_key_order() {
        let bf = brute_force_decode("FUBSWRJUDSKBLVFRRO").unwrap();
        let candidates: Vec<Candidate> = bf.candidates().collect();
        assert_eq!(candidates.len(), 26);
        for (i, c) in candidates.iter().enumerate() {
            assert_eq!(c.key, i as i64);
            assert_eq!(c.text, decode("FUBSWRJUDSKBLVFRRO", i as i64).unwrap());
        }
        assert_eq!(candidates[0].text, "FUBSWRJUDSKBLVFRRO");
        assert_eq!(candidates[3].text, "CRYPTOGRAPHYISCOOL");
    }

    #[test]
    fn restarts_from_key_zero() {
        let bf = brute_force_decode("KHOOR").unwrap();
        let mut first = bf.candidates();
        first.next();
        first.next();
        let snapshot = first.clone();
        assert_eq!(first.len(), 24);
        assert_eq!(first.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());

        let again: Vec<_> = (&bf).into_iter().collect();
        assert_eq!(again[0], Candidate::new(0, "KHOOR".to_string()));
        assert_eq!(again[3], Candidate::new(3, "HELLO".to_string()));
    }

    #[test]
    fn stops_after_last_key() {
        let bf = brute_force_decode("A").unwrap();
        let mut it = bf.candidates();
        assert_eq!(it.nth(25), Some(Candidate::new(25, "B".to_string())));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn empty_ciphertext_gives_empty_candidates() {
        let bf = brute_force_decode("").unwrap();
        assert!(bf.candidates().all(|c| c.text.is_empty()));
        assert_eq!(bf.candidates().count(), 26);
    }

    #[test]
    fn rejects_invalid_ciphertext() {
        assert_eq!(brute_force_decode("FU BS").unwrap_err(),
                   CipherError::InvalidCharacter { character: ' ', position: 2 });
    }

    proptest! {
        #[test]
        fn plaintext_appears_once_at_its_key(s in "[A-Z]{1,30}", k in 0i64..26) {
            let ciphertext = encode(&s, k).unwrap();
            let bf = brute_force_decode(&ciphertext).unwrap();
            let hits: Vec<i64> = bf.candidates().filter(|c| c.text == s).map(|c| c.key).collect();
            prop_assert_eq!(hits, vec![k]);
            prop_assert_eq!(&bf.candidates().nth(k as usize).unwrap().text, &s);
        }
    }
}
