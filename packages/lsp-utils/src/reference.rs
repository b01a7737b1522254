//! Contract reference resolution: address string or bound handle, plus an
//! optional signer, resolved once at entry.

use ethers::types::Address;

use crate::Error;

/// A contract handle that can be bound to an address or rebound to another signer.
pub trait Connect: Sized {
    type Signer;

    /// Bind a new handle at `address`.
    fn connect_at(address: Address, signer: &Self::Signer) -> Self;

    /// Rebind this handle to `signer`.
    fn connect(self, signer: &Self::Signer) -> Self;
}

/// Target contract of a helper call.
#[derive(Debug, Clone)]
pub enum ContractRef<C> {
    /// Account address as a hex string. Validated before binding.
    Address(String),
    /// Already bound contract handle.
    Handle(C),
}

impl<C: Connect> ContractRef<C> {
    /// Turn the reference into a callable contract.
    ///
    /// An address needs a signer to bind to; a handle is rebound only when a
    /// signer is supplied. No remote call is made here.
    pub fn resolve(self, signer: Option<&C::Signer>) -> Result<C, Error> {
        match self {
            ContractRef::Address(value) => {
                let address = lsp_types::parse_address(&value)
                    .ok_or_else(|| Error::InvalidReference(value.clone()))?;
                let signer = signer.ok_or_else(|| {
                    Error::InvalidReference(format!("{value} (no signer to bind the address to)"))
                })?;
                Ok(C::connect_at(address, signer))
            }
            ContractRef::Handle(handle) => Ok(match signer {
                Some(signer) => handle.connect(signer),
                None => handle,
            }),
        }
    }
}

impl<C> From<&str> for ContractRef<C> {
    fn from(value: &str) -> Self {
        ContractRef::Address(value.to_string())
    }
}

impl<C> From<String> for ContractRef<C> {
    fn from(value: String) -> Self {
        ContractRef::Address(value)
    }
}

impl<C> From<Address> for ContractRef<C> {
    fn from(value: Address) -> Self {
        ContractRef::Address(format!("{value:?}"))
    }
}
