use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order,
    Reply, Response, StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw2::set_contract_version;

use common::transport::ReceiverExecuteMsg;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, StoredMessagesResponse};
use crate::state::{
    StoredMessage, ADMIN, CHAIN_ID, CONTRACT_NAME, CONTRACT_VERSION, DELIVERY_ENABLED,
    DELIVER_REPLY_ID, DEST_ENDPOINTS, PATH_NONCES, PENDING_DELIVERY, STORED_COUNT,
    STORED_MESSAGES,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;
    CHAIN_ID.save(deps.storage, &msg.chain_id)?;
    DELIVERY_ENABLED.save(deps.storage, &true)?;
    STORED_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("chain_id", msg.chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            dst_chain_id,
            destination,
            payload,
            ..
        } => execute_send(deps, info, dst_chain_id, destination, payload),
        ExecuteMsg::Deliver {
            src_chain_id,
            src_address,
            dst_address,
            nonce,
            payload,
        } => execute_deliver(
            deps,
            env,
            src_chain_id,
            src_address,
            dst_address,
            nonce,
            payload,
        ),
        ExecuteMsg::SetDestEndpoint { chain_id, endpoint } => {
            execute_set_dest_endpoint(deps, info, chain_id, endpoint)
        }
        ExecuteMsg::SetDeliveryEnabled { enabled } => {
            execute_set_delivery_enabled(deps, info, enabled)
        }
        ExecuteMsg::RetryStored { id } => execute_retry_stored(deps, id),
    }
}

fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_id: u16,
    destination: Binary,
    payload: Binary,
) -> Result<Response, ContractError> {
    let endpoint = DEST_ENDPOINTS
        .may_load(deps.storage, dst_chain_id)?
        .ok_or(ContractError::DestinationNotSet {
            chain_id: dst_chain_id,
        })?;
    let dst_address =
        String::from_utf8(destination.to_vec()).map_err(|_| ContractError::InvalidDestination)?;

    let nonce = PATH_NONCES
        .may_load(deps.storage, (dst_chain_id, &info.sender))?
        .unwrap_or(0)
        + 1;
    PATH_NONCES.save(deps.storage, (dst_chain_id, &info.sender), &nonce)?;

    let message = StoredMessage {
        endpoint,
        src_chain_id: CHAIN_ID.load(deps.storage)?,
        src_address: Binary::from(info.sender.as_bytes()),
        dst_address,
        nonce,
        payload,
        reason: None,
    };

    let res = Response::new()
        .add_attribute("action", "send")
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string());

    if DELIVERY_ENABLED.load(deps.storage)? {
        Ok(res
            .add_message(deliver_msg(&message)?)
            .add_attribute("delivered", "true"))
    } else {
        let id = store_message(deps, &message)?;
        Ok(res
            .add_attribute("delivered", "false")
            .add_attribute("stored_id", id.to_string()))
    }
}

fn execute_deliver(
    deps: DepsMut,
    env: Env,
    src_chain_id: u16,
    src_address: Binary,
    dst_address: String,
    nonce: u64,
    payload: Binary,
) -> Result<Response, ContractError> {
    let receiver = deps.api.addr_validate(&dst_address)?;

    let receive_msg = WasmMsg::Execute {
        contract_addr: receiver.to_string(),
        msg: to_json_binary(&ReceiverExecuteMsg::LzReceive {
            src_chain_id,
            src_address: src_address.clone(),
            nonce,
            payload: payload.clone(),
        })?,
        funds: vec![],
    };

    PENDING_DELIVERY.save(
        deps.storage,
        &StoredMessage {
            endpoint: env.contract.address,
            src_chain_id,
            src_address,
            dst_address,
            nonce,
            payload,
            reason: None,
        },
    )?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(receive_msg, DELIVER_REPLY_ID))
        .add_attribute("action", "deliver")
        .add_attribute("src_chain_id", src_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string()))
}

fn execute_set_dest_endpoint(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    endpoint: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let endpoint = deps.api.addr_validate(&endpoint)?;
    DEST_ENDPOINTS.save(deps.storage, chain_id, &endpoint)?;

    Ok(Response::new()
        .add_attribute("action", "set_dest_endpoint")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("endpoint", endpoint))
}

fn execute_set_delivery_enabled(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    DELIVERY_ENABLED.save(deps.storage, &enabled)?;

    Ok(Response::new()
        .add_attribute("action", "set_delivery_enabled")
        .add_attribute("enabled", enabled.to_string()))
}

fn execute_retry_stored(deps: DepsMut, id: u64) -> Result<Response, ContractError> {
    let message = STORED_MESSAGES
        .may_load(deps.storage, id)?
        .ok_or(ContractError::StoredMessageNotFound { id })?;
    STORED_MESSAGES.remove(deps.storage, id);

    Ok(Response::new()
        .add_message(deliver_msg(&message)?)
        .add_attribute("action", "retry_stored")
        .add_attribute("id", id.to_string()))
}

fn deliver_msg(message: &StoredMessage) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: message.endpoint.to_string(),
        msg: to_json_binary(&ExecuteMsg::Deliver {
            src_chain_id: message.src_chain_id,
            src_address: message.src_address.clone(),
            dst_address: message.dst_address.clone(),
            nonce: message.nonce,
            payload: message.payload.clone(),
        })?,
        funds: vec![],
    }))
}

fn store_message(deps: DepsMut, message: &StoredMessage) -> StdResult<u64> {
    let id = STORED_COUNT.load(deps.storage)? + 1;
    STORED_COUNT.save(deps.storage, &id)?;
    STORED_MESSAGES.save(deps.storage, id, message)?;
    Ok(id)
}

/// Clears the in-flight delivery. Failed deliveries are kept for retry
/// instead of reverting the sender.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != DELIVER_REPLY_ID {
        return Err(ContractError::UnknownReply { id: msg.id });
    }

    let mut message = PENDING_DELIVERY.load(deps.storage)?;
    PENDING_DELIVERY.remove(deps.storage);

    let reason = match msg.result {
        SubMsgResult::Err(err) => err,
        SubMsgResult::Ok(_) => {
            return Ok(Response::new()
                .add_attribute("action", "delivered")
                .add_attribute("nonce", message.nonce.to_string()))
        }
    };
    message.reason = Some(reason.clone());
    let id = store_message(deps, &message)?;

    Ok(Response::new()
        .add_attribute("action", "delivery_failed")
        .add_attribute("stored_id", id.to_string())
        .add_attribute("reason", reason))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::StoredMessage { id } => {
            to_json_binary(&STORED_MESSAGES.may_load(deps.storage, id)?)
        }
        QueryMsg::StoredMessages {} => to_json_binary(&query_stored_messages(deps)?),
        QueryMsg::PathNonce {
            dst_chain_id,
            sender,
        } => {
            let sender = deps.api.addr_validate(&sender)?;
            let nonce = PATH_NONCES
                .may_load(deps.storage, (dst_chain_id, &sender))?
                .unwrap_or(0);
            to_json_binary(&nonce)
        }
    }
}

fn query_stored_messages(deps: Deps) -> StdResult<StoredMessagesResponse> {
    let messages = STORED_MESSAGES
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(StoredMessagesResponse { messages })
}
