//! tests/builder_tests.rs
//! TransformBuilder — defaults, seed padding and derivation variants

mod common;

#[cfg(feature = "zeroize")]
mod tests {
    use super::common::{LEGACY_KEY, LEGACY_SEED, TEST_ROUNDS};

    use keytransform_rs::aliases::Digest32;
    use keytransform_rs::consts::DEFAULT_TRANSFORM_ROUNDS;
    use keytransform_rs::{transform_key, TransformBuilder};

    #[test]
    fn defaults() {
        let builder = TransformBuilder::new();
        assert_eq!(builder.rounds(), DEFAULT_TRANSFORM_ROUNDS);
        assert_eq!(builder.seed(), &[0u8; 32]);

        let default = TransformBuilder::default();
        assert_eq!(default.rounds(), builder.rounds());
    }

    #[test]
    fn default_builder_matches_free_function() {
        assert_eq!(
            TransformBuilder::new().derive_hex(b"testkey"),
            transform_key(b"testkey", &[0u8; 32], DEFAULT_TRANSFORM_ROUNDS)
        );
    }

    #[test]
    fn seed_is_padded_on_set() {
        let builder = TransformBuilder::new().with_seed(b"abc");
        let mut expected = [0u8; 32];
        expected[..3].copy_from_slice(b"abc");
        assert_eq!(builder.seed(), &expected);

        let long: Vec<u8> = (0u8..48).collect();
        let builder = TransformBuilder::new().with_seed(&long);
        assert_eq!(&builder.seed()[..], &long[..32]);
    }

    #[test]
    fn custom_params_vector() {
        let builder = TransformBuilder::new()
            .with_seed(LEGACY_SEED)
            .with_rounds(1_000);

        assert_eq!(builder.rounds(), 1_000);
        assert_eq!(
            builder.derive_hex(LEGACY_KEY),
            "6b1d80233407b36b5771c296c0d3f944dd0d62a3c1e0260a33ea1d2b3c696872"
        );
    }

    #[test]
    fn zero_rounds_allowed() {
        let builder = TransformBuilder::new().with_rounds(0);
        assert_eq!(builder.rounds(), 0);
        assert_eq!(
            builder.derive_hex(b"testkey"),
            "98483c6eb40b6c31a448c22a66ded3b5e5e8d5119cac8327b655c8b5c4836489"
        );
    }

    #[test]
    fn derive_variants_agree() {
        let builder = TransformBuilder::new()
            .with_seed(b"builder-seed")
            .with_rounds(TEST_ROUNDS);

        let mut out = Digest32::new([0u8; 32]);
        builder.derive(b"secret", &mut out);
        let fresh = builder.derive_new(b"secret");

        assert_eq!(out.expose_secret(), fresh.expose_secret());
        assert_eq!(hex::encode(out.expose_secret()), builder.derive_hex(b"secret"));
    }

    #[test]
    fn builder_is_reusable_across_keys() {
        let builder = TransformBuilder::new()
            .with_seed(LEGACY_SEED)
            .with_rounds(TEST_ROUNDS);

        for key in [&b"one"[..], b"two", b""] {
            assert_eq!(
                builder.derive_hex(key),
                transform_key(key, LEGACY_SEED, TEST_ROUNDS)
            );
        }
    }

    #[test]
    fn builder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransformBuilder>();
    }
}
