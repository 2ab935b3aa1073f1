//! # Runtime Flows
//!
//! The node-runtime container end to end: configuration, genesis import,
//! block-time stamping and the installed ante chain.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ic_01_identity_registry::{GenesisState, IdentityRecord, InMemoryKVStore, MsgCreateIdentity};
    use ic_02_identity_gate::{AnteError, GateError, Msg, Tx};
    use node_runtime::{write_genesis, NodeConfig, SubsystemContainer};
    use shared_types::PageRequest;

    use crate::integration::fixtures::{addr, send};

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_node_from_env_with_genesis_file() {
        let dir = tempfile::tempdir().unwrap();
        let genesis_path = dir.path().join("genesis.json");
        let genesis = GenesisState::new(vec![
            IdentityRecord::new(addr(1), "founder-1", 0),
            IdentityRecord::new(addr(2), "founder-2", 0),
        ]);
        write_genesis(&genesis_path, &genesis).unwrap();

        let config = NodeConfig::from_lookup(env(&[
            ("IC_CHAIN_ID", "identity-itest"),
            ("IC_GENESIS_FILE", genesis_path.to_str().unwrap()),
        ]))
        .unwrap();
        let node = SubsystemContainer::new(config).unwrap();

        let ctx = node.begin_block(1, 1_700_000_100);
        assert_eq!(ctx.chain_id, "identity-itest");
        assert!(node.admit(ctx, &Tx::single(send(addr(1), addr(2))), false).is_ok());
    }

    #[test]
    fn test_custom_genesis_height_bypasses_only_that_height() {
        let config = NodeConfig::from_lookup(env(&[("IC_GENESIS_HEIGHT", "5")])).unwrap();
        let node =
            SubsystemContainer::with_store(config, Box::new(InMemoryKVStore::new())).unwrap();
        let tx = Tx::single(send(addr(1), addr(2)));

        assert!(node.admit(node.begin_block(5, 0), &tx, false).is_ok());
        assert!(matches!(
            node.admit(node.begin_block(6, 0), &tx, false),
            Err(AnteError::Gate(GateError::UnregisteredSigner { .. }))
        ));
    }

    #[test]
    fn test_block_time_stamps_created_at() {
        let node = SubsystemContainer::with_store(
            NodeConfig::default(),
            Box::new(InMemoryKVStore::new()),
        )
        .unwrap();

        node.begin_block(3, 1_700_000_300);
        let first = node
            .deliver_create_identity(&MsgCreateIdentity::new(addr(1).to_string(), "a"))
            .unwrap();
        node.begin_block(4, 1_700_000_400);
        let second = node
            .deliver_create_identity(&MsgCreateIdentity::new(addr(2).to_string(), "b"))
            .unwrap();

        assert_eq!(first.created_at, 1_700_000_300);
        assert_eq!(second.created_at, 1_700_000_400);
    }

    #[test]
    fn test_full_onboarding_flow() {
        let node = SubsystemContainer::with_store(
            NodeConfig::default(),
            Box::new(InMemoryKVStore::new()),
        )
        .unwrap();
        let ctx = node.begin_block(10, 1_700_001_000);

        // Unregistered users can only register
        let create_a = MsgCreateIdentity::new(addr(1).to_string(), "doc-a");
        let create_b = MsgCreateIdentity::new(addr(2).to_string(), "doc-b");
        let transfer = Tx::single(send(addr(1), addr(2)));
        assert!(node.admit(ctx.clone(), &transfer, false).is_err());

        for msg in [&create_a, &create_b] {
            let tx = Tx::single(Msg::from(msg.clone()));
            node.admit(ctx.clone(), &tx, false).unwrap();
            node.deliver_create_identity(msg).unwrap();
        }

        assert_eq!(node.admit(ctx.clone(), &transfer, false).unwrap(), ctx);

        let listed = node.list_identities(&PageRequest::default()).unwrap();
        assert_eq!(listed.items.len(), 2);

        // Exported state round-trips into a fresh node
        let exported = node.export_genesis().unwrap();
        let fresh = SubsystemContainer::with_store(
            NodeConfig::default(),
            Box::new(InMemoryKVStore::new()),
        )
        .unwrap();
        fresh.load_genesis(&exported).unwrap();
        assert_eq!(fresh.export_genesis().unwrap(), exported);
    }
}
