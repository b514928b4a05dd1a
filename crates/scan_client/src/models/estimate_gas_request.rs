use crate::constants::query_param;
use crate::scan_client::QueryParams;

/// Parameters of `eth_estimateGas`.
///
/// `data` and `to` are required; the remaining hex quantities are sent only
/// when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EthEstimateGasRequest {
    /// Method signature hash and encoded parameters
    pub data: String,

    /// Address to interact with
    pub to: String,

    /// Value sent with the call, in wei, hex encoded
    pub value: Option<String>,

    /// Gas provided for the call, hex encoded
    pub gas: Option<String>,

    /// Gas price in wei, hex encoded
    pub gas_price: Option<String>,
}

impl EthEstimateGasRequest {
    pub fn new(to: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_gas(mut self, gas: impl Into<String>) -> Self {
        self.gas = Some(gas.into());
        self
    }

    #[must_use]
    pub fn with_gas_price(mut self, gas_price: impl Into<String>) -> Self {
        self.gas_price = Some(gas_price.into());
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with(query_param::DATA, &self.data)
            .with(query_param::TO, &self.to)
            .with_optional(query_param::VALUE, self.value.as_ref())
            .with_optional(query_param::GAS, self.gas.as_ref())
            .with_optional(query_param::GAS_PRICE, self.gas_price.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_quantities_are_omitted() {
        let params = EthEstimateGasRequest::new("0xf0160428a8552ac9bb7e050d90eeade4ddd52843", "0x4e71d92d")
            .with_gas_price("0x51da038cc")
            .to_params();

        let keys: Vec<_> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["data", "to", "gasPrice"]);
        assert_eq!(params.get("gasPrice"), Some("0x51da038cc"));
    }
}
