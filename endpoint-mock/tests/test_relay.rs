//! Relay tests for the transport endpoint: path nonces, held messages and
//! stored failures.

use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult,
};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use common::transport::ReceiverExecuteMsg;
use endpoint_mock::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use endpoint_mock::state::StoredMessage;

const CHAIN_A: u16 = 101;
const CHAIN_B: u16 = 102;

// ============================================================================
// Receiver Contract
// ============================================================================

fn receiver_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn receiver_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ReceiverExecuteMsg,
) -> StdResult<Response> {
    let ReceiverExecuteMsg::LzReceive { nonce, payload, .. } = msg;
    if payload.as_slice() == b"fail" {
        return Err(StdError::generic_err("rejected"));
    }
    deps.storage.set(b"last_nonce", &nonce.to_be_bytes());
    Ok(Response::new())
}

fn receiver_query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    Ok(Binary::default())
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_endpoint() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        endpoint_mock::contract::execute,
        endpoint_mock::contract::instantiate,
        endpoint_mock::contract::query,
    )
    .with_reply(endpoint_mock::contract::reply);
    Box::new(contract)
}

fn contract_receiver() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(receiver_execute, receiver_instantiate, receiver_query);
    Box::new(contract)
}

struct TestEnv {
    app: App,
    admin: Addr,
    endpoint_a: Addr,
    endpoint_b: Addr,
    receiver: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");

    let endpoint_code = app.store_code(contract_endpoint());
    let receiver_code = app.store_code(contract_receiver());

    let mut endpoint = |chain_id: u16| {
        app.instantiate_contract(
            endpoint_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                chain_id,
            },
            &[],
            "endpoint",
            None,
        )
        .unwrap()
    };
    let endpoint_a = endpoint(CHAIN_A);
    let endpoint_b = endpoint(CHAIN_B);

    let receiver = app
        .instantiate_contract(
            receiver_code,
            admin.clone(),
            &Empty {},
            &[],
            "receiver",
            None,
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        endpoint_a.clone(),
        &ExecuteMsg::SetDestEndpoint {
            chain_id: CHAIN_B,
            endpoint: endpoint_b.to_string(),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        admin,
        endpoint_a,
        endpoint_b,
        receiver,
    }
}

impl TestEnv {
    fn send(&mut self, sender: &str, payload: &[u8]) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.endpoint_a.clone(),
            &ExecuteMsg::Send {
                dst_chain_id: CHAIN_B,
                destination: Binary::from(self.receiver.as_bytes()),
                payload: Binary::from(payload),
                refund_address: sender.to_string(),
                zro_payment_address: None,
                adapter_params: Binary::default(),
            },
            &[],
        )
    }

    fn path_nonce(&self, sender: &str) -> u64 {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.endpoint_a,
                &QueryMsg::PathNonce {
                    dst_chain_id: CHAIN_B,
                    sender: sender.to_string(),
                },
            )
            .unwrap()
    }

    fn last_received_nonce(&self) -> Option<u64> {
        self.app
            .wrap()
            .query_wasm_raw(&self.receiver, b"last_nonce".as_slice())
            .unwrap()
            .map(|raw| {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&raw);
                u64::from_be_bytes(bytes)
            })
    }

    fn stored(&self, endpoint: &Addr, id: u64) -> Option<StoredMessage> {
        self.app
            .wrap()
            .query_wasm_smart(endpoint, &QueryMsg::StoredMessage { id })
            .unwrap()
    }

    fn has_pending_delivery(&self, endpoint: &Addr) -> bool {
        self.app
            .wrap()
            .query_wasm_raw(endpoint, b"pending_delivery".as_slice())
            .unwrap()
            .is_some()
    }
}

// ============================================================================
// Relay
// ============================================================================

#[test]
fn test_path_nonces_count_per_sender() {
    let mut env = setup();

    env.send("terra1alice", b"one").unwrap();
    env.send("terra1alice", b"two").unwrap();
    assert_eq!(env.path_nonce("terra1alice"), 2);
    assert_eq!(env.last_received_nonce(), Some(2));

    assert_eq!(env.path_nonce("terra1bob"), 0);
    env.send("terra1bob", b"three").unwrap();
    assert_eq!(env.path_nonce("terra1bob"), 1);
    assert_eq!(env.last_received_nonce(), Some(1));

    let endpoint_b = env.endpoint_b.clone();
    assert!(!env.has_pending_delivery(&endpoint_b));
}

#[test]
fn test_send_to_unregistered_chain_rejected() {
    let mut env = setup();

    let res = env.app.execute_contract(
        Addr::unchecked("terra1alice"),
        env.endpoint_a.clone(),
        &ExecuteMsg::Send {
            dst_chain_id: 999,
            destination: Binary::from(env.receiver.as_bytes()),
            payload: Binary::from(b"one".as_slice()),
            refund_address: "terra1alice".to_string(),
            zro_payment_address: None,
            adapter_params: Binary::default(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("No endpoint registered for chain 999"),
        "got: {}",
        err_str
    );
}

#[test]
fn test_held_message_delivered_on_retry() {
    let mut env = setup();
    let (admin, endpoint_a) = (env.admin.clone(), env.endpoint_a.clone());

    env.app
        .execute_contract(
            admin,
            endpoint_a.clone(),
            &ExecuteMsg::SetDeliveryEnabled { enabled: false },
            &[],
        )
        .unwrap();

    env.send("terra1alice", b"held").unwrap();
    assert_eq!(env.last_received_nonce(), None);

    let held = env.stored(&endpoint_a, 1).unwrap();
    assert_eq!(held.nonce, 1);
    assert_eq!(held.payload, Binary::from(b"held".as_slice()));
    assert!(held.reason.is_none());

    env.app
        .execute_contract(
            Addr::unchecked("terra1anyone"),
            endpoint_a.clone(),
            &ExecuteMsg::RetryStored { id: 1 },
            &[],
        )
        .unwrap();
    assert_eq!(env.last_received_nonce(), Some(1));
    assert!(env.stored(&endpoint_a, 1).is_none());

    let res = env.app.execute_contract(
        Addr::unchecked("terra1anyone"),
        endpoint_a,
        &ExecuteMsg::RetryStored { id: 1 },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Stored message not found: 1"), "got: {}", err_str);
}

#[test]
fn test_failed_delivery_stored_without_reverting_sender() {
    let mut env = setup();
    let endpoint_b = env.endpoint_b.clone();

    // The receiver rejects, the send itself still succeeds
    env.send("terra1alice", b"fail").unwrap();
    assert_eq!(env.path_nonce("terra1alice"), 1);
    assert_eq!(env.last_received_nonce(), None);

    let failed = env.stored(&endpoint_b, 1).unwrap();
    assert_eq!(failed.src_chain_id, CHAIN_A);
    assert_eq!(failed.src_address, Binary::from(b"terra1alice".as_slice()));
    assert_eq!(failed.nonce, 1);
    let reason = failed.reason.unwrap();
    assert!(reason.contains("rejected"), "got: {}", reason);

    assert!(!env.has_pending_delivery(&endpoint_b));

    // A later delivery on the same endpoint is unaffected
    env.send("terra1alice", b"ok").unwrap();
    assert_eq!(env.last_received_nonce(), Some(2));
    assert!(!env.has_pending_delivery(&endpoint_b));
}

// ============================================================================
// Admin
// ============================================================================

#[test]
fn test_admin_only_configuration() {
    let mut env = setup();
    let endpoint_a = env.endpoint_a.clone();

    let res = env.app.execute_contract(
        Addr::unchecked("terra1alice"),
        endpoint_a.clone(),
        &ExecuteMsg::SetDestEndpoint {
            chain_id: CHAIN_B,
            endpoint: "terra1alice".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);

    let res = env.app.execute_contract(
        Addr::unchecked("terra1alice"),
        endpoint_a,
        &ExecuteMsg::SetDeliveryEnabled { enabled: false },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);
}
