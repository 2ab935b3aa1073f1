//! # Gate Flows
//!
//! The identity gate inside an ante chain, backed by a real registry.
//!
//! ## Scenarios
//!
//! 1. Genesis height and simulation bypass all checks
//! 2. Unregistered signer / recipient rejections name the offending address
//! 3. Batch transfers stop at the first unregistered input
//! 4. Identity module bootstrap messages are exempt
//! 5. Admitted transactions reach the next decorator unchanged
//! 6. A malformed address never masks an earlier unregistered signer

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ic_01_identity_registry::{IdentityRegistryApi, MsgCreateIdentity, MSG_UPDATE_PARAMS_TYPE_URL};
    use ic_02_identity_gate::{
        AddressRole, AnteChain, AnteContext, AnteDecorator, AnteError, AnteHandler, BypassReason,
        CustomMsg, ExemptMessageTable, GateConfig, GateError, GateEvent, Input, Msg, MsgMultiSend,
        MsgSend, Output, RecordingObserver, Tx,
    };
    use parking_lot::Mutex;
    use serde_json::json;

    use crate::integration::fixtures::{addr, gated_chain, multi_send, send, shared_registry};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Decorator placed after the gate; records every transaction it sees.
    #[derive(Default, Clone)]
    struct Downstream {
        seen: Arc<Mutex<Vec<(AnteContext, Tx, bool)>>>,
    }

    impl AnteDecorator for Downstream {
        fn ante_handle(
            &self,
            ctx: AnteContext,
            tx: &Tx,
            simulate: bool,
            next: &dyn AnteHandler,
        ) -> Result<AnteContext, AnteError> {
            self.seen.lock().push((ctx.clone(), tx.clone(), simulate));
            next.handle(ctx, tx, simulate)
        }
    }

    fn ctx(height: u64) -> AnteContext {
        AnteContext::new(height, "identity-testnet")
    }

    fn gate_error(result: Result<AnteContext, AnteError>) -> GateError {
        match result {
            Err(AnteError::Gate(e)) => e,
            other => panic!("expected gate rejection, got {:?}", other),
        }
    }

    // =============================================================================
    // BYPASS
    // =============================================================================

    #[test]
    fn test_height_zero_admits_anything() {
        let registry = shared_registry(&[]);
        let observer = Arc::new(RecordingObserver::new());
        let chain = gated_chain(&registry, GateConfig::default(), observer.clone());

        let tx = Tx::new(vec![
            send(addr(1), addr(2)),
            multi_send(&[addr(3)], &[addr(4)]),
            Msg::from(CustomMsg::new("/x.v1.MsgNoSigner")),
        ]);
        assert_eq!(chain.handle(ctx(0), &tx, false).unwrap(), ctx(0));
        assert!(observer.checked().is_empty());
    }

    #[test]
    fn test_simulation_admits_unregistered_signer() {
        let registry = shared_registry(&[]);
        let observer = Arc::new(RecordingObserver::new());
        let chain = gated_chain(&registry, GateConfig::default(), observer.clone());

        assert!(chain.handle(ctx(100), &Tx::single(send(addr(1), addr(2))), true).is_ok());
        assert_eq!(
            observer.events(),
            vec![GateEvent::Bypassed {
                block_height: 100,
                reason: BypassReason::Simulate
            }]
        );
    }

    // =============================================================================
    // SINGLE TRANSFER
    // =============================================================================

    #[test]
    fn test_unregistered_sender_rejected() {
        let registry = shared_registry(&[addr(2)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let err = gate_error(chain.handle(ctx(100), &Tx::single(send(addr(1), addr(2))), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(1) });
        assert!(err.to_string().contains(&addr(1).to_string()));
    }

    #[test]
    fn test_unregistered_recipient_rejected() {
        let registry = shared_registry(&[addr(1)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let err = gate_error(chain.handle(ctx(100), &Tx::single(send(addr(1), addr(2))), false));
        assert_eq!(err, GateError::UnregisteredRecipient { address: addr(2) });
    }

    #[test]
    fn test_registered_pair_forwarded_unchanged() {
        let registry = shared_registry(&[addr(1), addr(2)]);
        let downstream = Downstream::default();
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default())
            .with(downstream.clone());

        let tx = Tx::single(send(addr(1), addr(2)));
        assert_eq!(chain.handle(ctx(100), &tx, false).unwrap(), ctx(100));
        assert_eq!(*downstream.seen.lock(), vec![(ctx(100), tx, false)]);
    }

    #[test]
    fn test_rejected_tx_never_reaches_downstream() {
        let registry = shared_registry(&[]);
        let downstream = Downstream::default();
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default())
            .with(downstream.clone());

        assert!(chain.handle(ctx(100), &Tx::single(send(addr(1), addr(2))), false).is_err());
        assert!(downstream.seen.lock().is_empty());
    }

    // =============================================================================
    // BATCH TRANSFER
    // =============================================================================

    #[test]
    fn test_multi_send_rejects_third_input_regardless_of_outputs() {
        let registry = shared_registry(&[addr(1), addr(2), addr(8)]);
        let observer = Arc::new(RecordingObserver::new());
        let chain = gated_chain(&registry, GateConfig::default(), observer.clone());

        for outputs in [vec![addr(8)], vec![addr(9)], vec![]] {
            observer.clear();
            let msg = multi_send(&[addr(1), addr(2), addr(3)], &outputs);
            let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
            assert_eq!(err, GateError::UnregisteredSigner { address: addr(3) });
            assert!(observer
                .checked()
                .iter()
                .all(|(role, _)| *role == AddressRole::Signer));
        }
    }

    #[test]
    fn test_multi_send_checks_outputs_after_inputs() {
        let registry = shared_registry(&[addr(1), addr(2), addr(8)]);
        let observer = Arc::new(RecordingObserver::new());
        let chain = gated_chain(&registry, GateConfig::default(), observer.clone());

        let msg = multi_send(&[addr(1), addr(2)], &[addr(8), addr(9), addr(10)]);
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(err, GateError::UnregisteredRecipient { address: addr(9) });
        assert_eq!(
            observer.checked(),
            vec![
                (AddressRole::Signer, addr(1)),
                (AddressRole::Signer, addr(2)),
                (AddressRole::Recipient, addr(8)),
                (AddressRole::Recipient, addr(9)),
            ]
        );
    }

    // =============================================================================
    // EXEMPTIONS AND GENERIC MESSAGES
    // =============================================================================

    #[test]
    fn test_create_identity_from_unregistered_address_admitted() {
        let registry = shared_registry(&[]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(MsgCreateIdentity::new(addr(5).to_string(), "doc-5"));
        assert!(chain.handle(ctx(100), &Tx::single(msg), false).is_ok());
    }

    #[test]
    fn test_update_params_exempt() {
        let registry = shared_registry(&[]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(
            CustomMsg::new(MSG_UPDATE_PARAMS_TYPE_URL).with_field("authority", json!("gov")),
        );
        assert!(chain.handle(ctx(100), &Tx::single(msg), false).is_ok());
    }

    #[test]
    fn test_custom_exempt_table_replaces_default() {
        let registry = shared_registry(&[]);
        let config = GateConfig {
            exempt_messages: ExemptMessageTable::new(["/faucet.v1.MsgDrip"]),
            ..Default::default()
        };
        let chain = gated_chain(&registry, config, Arc::default());

        let drip = Msg::from(CustomMsg::new("/faucet.v1.MsgDrip"));
        assert!(chain.handle(ctx(100), &Tx::single(drip), false).is_ok());

        let create = Msg::from(MsgCreateIdentity::new(addr(5).to_string(), "doc-5"));
        let err = gate_error(chain.handle(ctx(100), &Tx::single(create), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(5) });
    }

    #[test]
    fn test_generic_message_signer_via_creator_field() {
        let registry = shared_registry(&[addr(1)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let ok = Msg::from(CustomMsg::new("/dex.v1.MsgSwap").with_field("creator", json!(addr(1).to_string())));
        assert!(chain.handle(ctx(100), &Tx::single(ok), false).is_ok());

        let bad = Msg::from(CustomMsg::new("/dex.v1.MsgSwap").with_field("signer", json!(addr(2).to_string())));
        let err = gate_error(chain.handle(ctx(100), &Tx::single(bad), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(2) });
    }

    #[test]
    fn test_declared_signers_all_checked() {
        let registry = shared_registry(&[addr(1)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(
            CustomMsg::new("/group.v1.MsgExec").with_signers([addr(1).to_string(), addr(4).to_string()]),
        );
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(4) });
    }

    #[test]
    fn test_message_without_signer_rejected() {
        let registry = shared_registry(&[]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(CustomMsg::new("/x.v1.MsgTick").with_field("round", json!(3)));
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(
            err,
            GateError::SignerUnresolved {
                type_url: "/x.v1.MsgTick".into()
            }
        );
    }

    #[test]
    fn test_generic_transfer_cannot_hide_recipient() {
        let registry = shared_registry(&[addr(1)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(
            CustomMsg::new("/bank.v1.MsgSend")
                .with_field("from_address", json!(addr(1).to_string()))
                .with_field("to_address", json!(addr(2).to_string())),
        );
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(err, GateError::UnregisteredRecipient { address: addr(2) });
    }

    // =============================================================================
    // MALFORMED ADDRESSES
    // =============================================================================

    #[test]
    fn test_unregistered_sender_wins_over_malformed_recipient() {
        let registry = shared_registry(&[]);
        let observer = Arc::new(RecordingObserver::new());
        let chain = gated_chain(&registry, GateConfig::default(), observer.clone());

        let msg = Msg::from(MsgSend::new(addr(1).to_string(), "garbage", vec![]));
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(1) });
        assert_eq!(observer.checked(), vec![(AddressRole::Signer, addr(1))]);
    }

    #[test]
    fn test_multi_send_unregistered_input_wins_over_malformed_output() {
        let registry = shared_registry(&[addr(1), addr(2)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(MsgMultiSend {
            inputs: vec![
                Input::new(addr(1).to_string(), vec![]),
                Input::new(addr(2).to_string(), vec![]),
                Input::new(addr(3).to_string(), vec![]),
            ],
            outputs: vec![Output::new("0xdeadbeef", vec![])],
        });
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(3) });
    }

    #[test]
    fn test_malformed_later_signer_does_not_mask_earlier_one() {
        let registry = shared_registry(&[]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(
            CustomMsg::new("/group.v1.MsgExec").with_signers([addr(6).to_string(), "0xzz".into()]),
        );
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(err, GateError::UnregisteredSigner { address: addr(6) });
    }

    #[test]
    fn test_malformed_recipient_after_registered_sender() {
        let registry = shared_registry(&[addr(1)]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(MsgSend::new(addr(1).to_string(), "garbage", vec![]));
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(
            err,
            GateError::InvalidAddress {
                raw: "garbage".into()
            }
        );
    }

    #[test]
    fn test_empty_creator_field_is_unresolved() {
        let registry = shared_registry(&[]);
        let chain = gated_chain(&registry, GateConfig::default(), Arc::default());

        let msg = Msg::from(CustomMsg::new("/dex.v1.MsgSwap").with_field("creator", json!("")));
        let err = gate_error(chain.handle(ctx(100), &Tx::single(msg), false));
        assert_eq!(
            err,
            GateError::SignerUnresolved {
                type_url: "/dex.v1.MsgSwap".into()
            }
        );
    }

    // =============================================================================
    // SEQUENTIAL BLOCK EXECUTION
    // =============================================================================

    #[test]
    fn test_registration_then_transfer_in_later_tx() {
        let registry = shared_registry(&[addr(2)]);
        let chain: AnteChain = gated_chain(&registry, GateConfig::default(), Arc::default());
        let transfer = Tx::single(send(addr(1), addr(2)));

        assert!(chain.handle(ctx(100), &transfer, false).is_err());

        // Deliver the create message between transactions
        registry
            .write()
            .handle_create_identity(&MsgCreateIdentity::new(addr(1).to_string(), "doc-1"))
            .unwrap();
        assert!(chain.handle(ctx(100), &transfer, false).is_ok());

        // And removal takes effect immediately
        registry.write().remove(&addr(2)).unwrap();
        let err = gate_error(chain.handle(ctx(101), &transfer, false));
        assert_eq!(err, GateError::UnregisteredRecipient { address: addr(2) });
    }
}
