//! Entity identifiers

use rand::Rng;

const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 13;

/// Id used for the synthesized, never-persisted water record
pub const TEMP_ID: &str = "temp";

/// Generate an opaque, locally unique identifier.
///
/// Collisions are not checked; at single-user scale 13 base-36 characters
/// are plenty.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(id, TEMP_ID);
    }

    #[test]
    fn test_generate_id_distinct() {
        let ids: HashSet<String> = (0..500).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
