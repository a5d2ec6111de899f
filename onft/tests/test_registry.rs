//! Registry, metadata and governance tests for a single collection.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use onft::msg::{
    ChainIdResponse, ConfigResponse, ContractUriResponse, ExecuteMsg, InstantiateMsg,
    IsMinterResponse, NumTokensResponse, OwnerOfResponse, QueryMsg,
    TokenUriResponse, TokensResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_onft() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        onft::contract::execute,
        onft::contract::instantiate,
        onft::contract::query,
    );
    Box::new(contract)
}

fn instantiate_msg(admin: &Addr, minter: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        admin: admin.to_string(),
        name: "Omni Pass".to_string(),
        symbol: "OPASS".to_string(),
        base_uri: "ipfs://hidden/".to_string(),
        endpoint: "terra1endpoint".to_string(),
        fee_collector: "terra1treasury".to_string(),
        this_chain_id: 101,
        token_id_start: 1,
        max_supply: 5,
        minters: vec![minter.to_string()],
    }
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();

    let admin = Addr::unchecked("terra1admin");
    let minter = Addr::unchecked("terra1minter");

    let code_id = app.store_code(contract_onft());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &instantiate_msg(&admin, &minter),
            &[],
            "onft",
            Some(admin.to_string()),
        )
        .unwrap();

    (app, contract_addr, admin, minter)
}

fn mint(app: &mut App, contract: &Addr, minter: &Addr, to: &str) {
    app.execute_contract(
        minter.clone(),
        contract.clone(),
        &ExecuteMsg::Mint { to: to.to_string() },
        &[],
    )
    .unwrap();
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate_config() {
    let (app, contract, admin, _) = setup();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.admin, admin);
    assert_eq!(config.name, "Omni Pass");
    assert_eq!(config.symbol, "OPASS");
    assert_eq!(config.endpoint, Addr::unchecked("terra1endpoint"));
    assert_eq!(config.fee_collector, Addr::unchecked("terra1treasury"));
    assert_eq!(config.this_chain_id, 101);
    assert_eq!(config.token_id_start, 1);
    assert_eq!(config.max_supply, 5);
    assert!(!config.revealed);
    assert!(!config.paused);

    // Contract URI starts out as the base URI
    let uri: ContractUriResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::ContractUri {})
        .unwrap();
    assert_eq!(uri.contract_uri, "ipfs://hidden/");
}

#[test]
fn test_instantiate_rejects_reserved_chain_id() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let code_id = app.store_code(contract_onft());

    let mut msg = instantiate_msg(&admin, &admin);
    msg.this_chain_id = 0;
    let res = app.instantiate_contract(code_id, admin.clone(), &msg, &[], "onft", None);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid chain ID: 0"), "got: {}", err_str);
}

#[test]
fn test_instantiate_rejects_zero_supply() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let code_id = app.store_code(contract_onft());

    let mut msg = instantiate_msg(&admin, &admin);
    msg.max_supply = 0;
    let res = app.instantiate_contract(code_id, admin.clone(), &msg, &[], "onft", None);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid config"), "got: {}", err_str);
}

// ============================================================================
// Minting
// ============================================================================

#[test]
fn test_mint_sequential_ids_from_start() {
    let (mut app, contract, _, minter) = setup();

    mint(&mut app, &contract, &minter, "terra1alice");
    mint(&mut app, &contract, &minter, "terra1bob");
    mint(&mut app, &contract, &minter, "terra1alice");

    let owner: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::OwnerOf { token_id: 2 })
        .unwrap();
    assert_eq!(owner.owner, Addr::unchecked("terra1bob"));

    let tokens: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::Tokens {
                owner: "terra1alice".to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(tokens.tokens, vec![1, 3]);

    let all: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::AllTokens {
                start_after: Some(1),
                limit: Some(1),
            },
        )
        .unwrap();
    assert_eq!(all.tokens, vec![2]);

    // Minted tokens are native
    let chain: ChainIdResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::ChainId { token_id: 3 })
        .unwrap();
    assert_eq!(chain.chain_id, 0);
}

#[test]
fn test_mint_without_role_rejected() {
    let (mut app, contract, _, _) = setup();

    let res = app.execute_contract(
        Addr::unchecked("terra1alice"),
        contract,
        &ExecuteMsg::Mint {
            to: "terra1alice".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Forbidden"), "got: {}", err_str);
}

#[test]
fn test_mint_stops_at_max_supply() {
    let (mut app, contract, _, minter) = setup();

    for _ in 0..5 {
        mint(&mut app, &contract, &minter, "terra1alice");
    }

    let res = app.execute_contract(
        minter.clone(),
        contract.clone(),
        &ExecuteMsg::Mint {
            to: "terra1alice".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Max supply reached: 5"), "got: {}", err_str);

    let num: NumTokensResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::NumTokens {})
        .unwrap();
    assert_eq!(num.count, 5);
    assert_eq!(num.minted, 5);
}

#[test]
fn test_grant_and_revoke_minter() {
    let (mut app, contract, admin, _) = setup();
    let alice = Addr::unchecked("terra1alice");

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::GrantMinter {
            address: alice.to_string(),
        },
        &[],
    )
    .unwrap();
    let res: IsMinterResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::IsMinter {
                address: alice.to_string(),
            },
        )
        .unwrap();
    assert!(res.is_minter);
    mint(&mut app, &contract, &alice, "terra1alice");

    app.execute_contract(
        admin,
        contract.clone(),
        &ExecuteMsg::RevokeMinter {
            address: alice.to_string(),
        },
        &[],
    )
    .unwrap();
    let res = app.execute_contract(
        alice.clone(),
        contract.clone(),
        &ExecuteMsg::Mint {
            to: alice.to_string(),
        },
        &[],
    );
    assert!(res.is_err());

    // Role management is admin-only
    let res = app.execute_contract(
        alice.clone(),
        contract,
        &ExecuteMsg::GrantMinter {
            address: alice.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Forbidden"), "got: {}", err_str);
}

// ============================================================================
// Transfers
// ============================================================================

#[test]
fn test_transfer_nft() {
    let (mut app, contract, _, minter) = setup();
    let alice = Addr::unchecked("terra1alice");

    mint(&mut app, &contract, &minter, alice.as_str());

    let res = app.execute_contract(
        Addr::unchecked("terra1bob"),
        contract.clone(),
        &ExecuteMsg::TransferNft {
            recipient: "terra1bob".to_string(),
            token_id: 1,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Not owner of token 1"), "got: {}", err_str);

    app.execute_contract(
        alice,
        contract.clone(),
        &ExecuteMsg::TransferNft {
            recipient: "terra1bob".to_string(),
            token_id: 1,
        },
        &[],
    )
    .unwrap();

    let owner: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::OwnerOf { token_id: 1 })
        .unwrap();
    assert_eq!(owner.owner, Addr::unchecked("terra1bob"));
}

#[test]
fn test_tokens_by_owner_follow_transfers() {
    let (mut app, contract, _, minter) = setup();
    let alice = Addr::unchecked("terra1alice");

    mint(&mut app, &contract, &minter, alice.as_str());
    mint(&mut app, &contract, &minter, "terra1bob");
    mint(&mut app, &contract, &minter, alice.as_str());
    mint(&mut app, &contract, &minter, alice.as_str());

    app.execute_contract(
        alice,
        contract.clone(),
        &ExecuteMsg::TransferNft {
            recipient: "terra1bob".to_string(),
            token_id: 3,
        },
        &[],
    )
    .unwrap();

    let tokens_of = |app: &App, owner: &str, start_after: Option<u64>, limit: Option<u32>| {
        let res: TokensResponse = app
            .wrap()
            .query_wasm_smart(
                &contract,
                &QueryMsg::Tokens {
                    owner: owner.to_string(),
                    start_after,
                    limit,
                },
            )
            .unwrap();
        res.tokens
    };

    assert_eq!(tokens_of(&app, "terra1alice", None, None), vec![1, 4]);
    assert_eq!(tokens_of(&app, "terra1bob", None, None), vec![2, 3]);
    assert_eq!(tokens_of(&app, "terra1bob", Some(2), Some(1)), vec![3]);
    assert!(tokens_of(&app, "terra1carol", None, None).is_empty());
}

#[test]
fn test_owner_of_unknown_token() {
    let (app, contract, _, _) = setup();

    let err = app
        .wrap()
        .query_wasm_smart::<OwnerOfResponse>(&contract, &QueryMsg::OwnerOf { token_id: 42 })
        .unwrap_err();
    assert!(err.to_string().contains("Nonexistent token: 42"), "got: {}", err);
}

// ============================================================================
// Origin Chains
// ============================================================================

#[test]
fn test_set_chain_id_and_bulk() {
    let (mut app, contract, admin, _) = setup();

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::SetChainId {
            token_id: 3,
            chain_id: 110,
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::SetChainIds {
            token_ids: vec![4, 5],
            chain_ids: vec![111, 112],
        },
        &[],
    )
    .unwrap();

    for (token_id, expected) in [(3u64, 110u16), (4, 111), (5, 112), (6, 0)] {
        let res: ChainIdResponse = app
            .wrap()
            .query_wasm_smart(&contract, &QueryMsg::ChainId { token_id })
            .unwrap();
        assert_eq!(res.chain_id, expected, "token {}", token_id);
    }

    let res = app.execute_contract(
        admin,
        contract.clone(),
        &ExecuteMsg::SetChainIds {
            token_ids: vec![1, 2, 3],
            chain_ids: vec![1],
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Length mismatch"), "got: {}", err_str);

    let res = app.execute_contract(
        Addr::unchecked("terra1alice"),
        contract,
        &ExecuteMsg::SetChainId {
            token_id: 1,
            chain_id: 9,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Forbidden"), "got: {}", err_str);
}

// ============================================================================
// Metadata
// ============================================================================

#[test]
fn test_reveal_switches_token_uri() {
    let (mut app, contract, admin, _) = setup();

    let uri: TokenUriResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::TokenUri { token_id: 3 })
        .unwrap();
    assert_eq!(uri.token_uri, "ipfs://hidden/");

    let res = app.execute_contract(
        Addr::unchecked("terra1alice"),
        contract.clone(),
        &ExecuteMsg::ActivateReveal {},
        &[],
    );
    assert!(res.is_err());

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::SetBaseUri {
            base_uri: "ipfs://revealed/".to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::ActivateReveal {},
        &[],
    )
    .unwrap();

    let uri: TokenUriResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::TokenUri { token_id: 3 })
        .unwrap();
    assert_eq!(uri.token_uri, "ipfs://revealed/3");

    app.execute_contract(
        admin,
        contract.clone(),
        &ExecuteMsg::SetReveal { revealed: false },
        &[],
    )
    .unwrap();
    let uri: TokenUriResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::TokenUri { token_id: 3 })
        .unwrap();
    assert_eq!(uri.token_uri, "ipfs://revealed/");
}

#[test]
fn test_set_contract_uri_and_fee_collector() {
    let (mut app, contract, admin, _) = setup();

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::SetContractUri {
            contract_uri: "ipfs://meta.json".to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin,
        contract.clone(),
        &ExecuteMsg::SetFeeCollector {
            fee_collector: "terra1newtreasury".to_string(),
        },
        &[],
    )
    .unwrap();

    let uri: ContractUriResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::ContractUri {})
        .unwrap();
    assert_eq!(uri.contract_uri, "ipfs://meta.json");
    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.fee_collector, Addr::unchecked("terra1newtreasury"));

    let res = app.execute_contract(
        Addr::unchecked("terra1alice"),
        contract,
        &ExecuteMsg::SetFeeCollector {
            fee_collector: "terra1alice".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Forbidden"), "got: {}", err_str);
}

// ============================================================================
// Admin Transfer
// ============================================================================

#[test]
fn test_transfer_admin() {
    let (mut app, contract, admin, _) = setup();
    let new_admin = Addr::unchecked("terra1newadmin");

    let res = app.execute_contract(
        Addr::unchecked("terra1alice"),
        contract.clone(),
        &ExecuteMsg::TransferAdmin {
            new_admin: "terra1alice".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Forbidden"), "got: {}", err_str);

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::TransferAdmin {
            new_admin: new_admin.to_string(),
        },
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.admin, new_admin);

    // Old admin lost its powers
    let res = app.execute_contract(
        admin,
        contract.clone(),
        &ExecuteMsg::SetReveal { revealed: true },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Forbidden"), "got: {}", err_str);

    app.execute_contract(
        new_admin,
        contract,
        &ExecuteMsg::SetReveal { revealed: true },
        &[],
    )
    .unwrap();
}
