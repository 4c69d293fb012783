use cosmwasm_std::{ensure_eq, DepsMut, Env, Response, Storage};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use lnt_msg::vault::MigrateMsg;

use crate::{error::ContractError, state::CONTRACT_NAME};

pub fn migrate_contract(
    deps: DepsMut,
    _env: Env,
    msg: MigrateMsg,
) -> Result<Response, ContractError> {
    let (version_previous, version_new) = get_versions(deps.storage, msg)?;

    if version_new > version_previous {
        set_contract_version(deps.storage, CONTRACT_NAME, version_new.to_string())?;
    }

    Ok(Response::new().add_attribute("new_contract_version", version_new.to_string()))
}

fn get_versions(
    storage: &dyn Storage,
    msg: MigrateMsg,
) -> Result<(Version, Version), ContractError> {
    let stored = get_contract_version(storage)?;
    ensure_eq!(
        stored.contract,
        CONTRACT_NAME,
        ContractError::ContractNameErr(stored.contract)
    );

    let version_previous: Version = stored
        .version
        .parse()
        .map_err(|_| ContractError::ParsingPrevVersion)?;

    let version_new: Version = env!("CARGO_PKG_VERSION")
        .parse()
        .map_err(|_| ContractError::ParsingNewVersion)?;

    if version_new.to_string() != msg.version {
        Err(ContractError::ImproperMsgVersion)?;
    }

    Ok((version_previous, version_new))
}
