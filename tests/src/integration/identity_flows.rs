//! # Identity Flows
//!
//! Two nodes exchanging identities the way a handshake does:
//!
//! 1. **Key generation**: each node builds its `LocalIdentity`
//! 2. **Announcement**: the remote side rebuilds the identity from address + public key
//! 3. **Challenge**: a signed nonce is verified against the announced identity
//! 4. **Routing**: both sides agree on the bucket they file each other under

#[cfg(test)]
mod tests {
    use super::super::ALL_CONFIGS;
    use overlay_crypto::{CryptoBackend, HashPolicy};
    use overlay_peer::{
        bucket_for_peer, calculate_bucket_index, compare_distance, xor_distance, IdentityService,
        PeerId,
    };
    use rand::RngCore;
    use std::collections::BTreeSet;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn random_nonce() -> [u8; 32] {
        let mut nonce = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut nonce);
        nonce
    }

    // =============================================================================
    // HANDSHAKE
    // =============================================================================

    #[test]
    fn test_handshake_challenge_verifies_for_every_config() {
        for config in ALL_CONFIGS {
            let service = IdentityService::from_config(&config);
            let alice = service.generate_local("10.0.0.1:30303").unwrap();
            let bob = service.generate_local("10.0.0.2:30303").unwrap();

            // Bob learns Alice's identity from the wire
            let announced = service
                .create_id(
                    alice.id().address(),
                    alice.key_pair().public_key().to_vec(),
                )
                .unwrap();
            assert_eq!(&announced, alice.id(), "{config:?}");
            assert_eq!(
                announced.public_key_hex(),
                hex::encode(alice.key_pair().public_key())
            );

            let nonce = random_nonce();
            let sig = service.sign(&alice, &nonce).unwrap();
            assert_eq!(sig.len(), service.backend().signature_size());

            assert!(service.verify_peer(&announced, &nonce, &sig), "{config:?}");
            assert!(
                !service.verify_peer(bob.id(), &nonce, &sig),
                "Signature must not verify under another peer's key ({config:?})"
            );
        }
    }

    #[test]
    fn test_challenge_replayed_on_other_nonce_is_rejected() {
        for config in ALL_CONFIGS {
            let service = IdentityService::from_config(&config);
            let alice = service.generate_local("a").unwrap();

            let sig = service.sign(&alice, &random_nonce()).unwrap();
            let fresh = random_nonce();

            assert_eq!(
                service.try_verify_peer(alice.id(), &fresh, &sig),
                Ok(false),
                "{config:?}"
            );
        }
    }

    #[test]
    fn test_routing_bucket_agrees_on_both_sides() {
        for config in ALL_CONFIGS {
            let service = IdentityService::from_config(&config);
            let alice = service.generate_local("a").unwrap();
            let bob = service.generate_local("b").unwrap();

            let from_alice = service.bucket_index(alice.id(), bob.id());
            let from_bob = service.bucket_index(bob.id(), alice.id());

            assert_eq!(from_alice, from_bob);
            assert_eq!(from_alice, alice.id().xor_id(bob.id()).prefix_len());
            assert!(from_alice < service.hash_policy().digest_len() * 8);
        }
    }

    #[test]
    fn test_restored_node_keeps_its_bucket_placement() {
        for config in ALL_CONFIGS {
            let service = IdentityService::from_config(&config);
            let node = service.generate_local("before-restart").unwrap();
            let peer = service.generate_local("peer").unwrap();

            let restored = service
                .restore_local(
                    "after-restart",
                    node.key_pair().private_key().to_vec(),
                )
                .unwrap();

            assert_eq!(restored.id(), node.id());
            assert_eq!(
                calculate_bucket_index(restored.id(), peer.id()),
                calculate_bucket_index(node.id(), peer.id())
            );
        }
    }

    // =============================================================================
    // DIGEST POLICY
    // =============================================================================

    #[test]
    fn test_same_key_under_different_policies_is_a_different_identity() {
        let [blake3_ed, sha256_ed, ..] = ALL_CONFIGS;
        let blake3 = IdentityService::from_config(&blake3_ed);
        let sha256 = IdentityService::from_config(&sha256_ed);

        let local = blake3.generate_local("a").unwrap();
        let under_sha = sha256
            .create_id("a", local.key_pair().public_key().to_vec())
            .unwrap();

        assert_ne!(local.id(), &under_sha);
        assert_eq!(local.id().public_key(), under_sha.public_key());

        // Logged and displayed digests are the hex of the policy output
        let sha_digest = sha256
            .hash_policy()
            .hash_bytes(local.key_pair().public_key())
            .unwrap();
        assert_eq!(under_sha.id_hex(), hex::encode(&sha_digest));
        assert_eq!(
            under_sha.to_string(),
            format!("ID{{Address: a, Id: {}}}", hex::encode(&sha_digest))
        );
    }

    // =============================================================================
    // XOR METRIC PROPERTIES
    // =============================================================================

    fn random_peers(count: usize) -> Vec<PeerId> {
        let service = IdentityService::from_config(&ALL_CONFIGS[0]);
        (0..count)
            .map(|i| service.generate_local(format!("10.0.0.{i}:30303")).unwrap())
            .map(|local| local.into_peer_id())
            .collect()
    }

    #[test]
    fn test_xor_id_composes() {
        let peers = random_peers(3);
        let (a, b, c) = (&peers[0], &peers[1], &peers[2]);

        // d(a, b) xor d(b, c) == d(a, c)
        let via_b = a.xor_id(b).xor_id(&b.xor_id(c));
        assert_eq!(via_b.id(), a.xor_id(c).id());
    }

    #[test]
    fn test_distance_metric_properties() {
        let peers = random_peers(8);

        for a in &peers {
            assert_eq!(xor_distance(a, a).bucket_index(), 255);
            for b in &peers {
                assert_eq!(xor_distance(a, b), xor_distance(b, a));
                assert_eq!(bucket_for_peer(a, b), a.xor_id(b).prefix_len());
            }
        }
    }

    #[test]
    fn test_sorting_by_distance_puts_target_first() {
        let peers = random_peers(16);
        let target = peers[5].clone();

        let mut sorted = peers.clone();
        sorted.sort_by(|a, b| compare_distance(&target, a, b));

        assert_eq!(sorted[0], target);
        for pair in sorted.windows(2) {
            let da = pair[0].xor_id(&target);
            let db = pair[1].xor_id(&target);
            assert!(da.id() <= db.id());
        }
    }

    #[test]
    fn test_identities_are_unique_and_ordered() {
        let peers = random_peers(32);
        let unique: BTreeSet<PeerId> = peers.iter().cloned().collect();

        assert_eq!(unique.len(), peers.len());
        let ordered: Vec<&PeerId> = unique.iter().collect();
        for pair in ordered.windows(2) {
            assert!(pair[0].less(pair[1]));
        }
    }
}
