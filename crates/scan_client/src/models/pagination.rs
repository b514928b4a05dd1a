use super::Sort;
use crate::constants::query_param;
use crate::scan_client::QueryParams;

/// Block range and paging shared by the account listings.
///
/// Unset fields are left out of the query and the explorer applies its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: Option<u32>,
    /// Entries per page
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

impl Pagination {
    #[must_use]
    pub fn blocks(mut self, start_block: u64, end_block: u64) -> Self {
        self.start_block = Some(start_block);
        self.end_block = Some(end_block);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32, offset: u32) -> Self {
        self.page = Some(page);
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub(crate) fn append_to(&self, params: QueryParams) -> QueryParams {
        params
            .with_optional(query_param::START_BLOCK, self.start_block)
            .with_optional(query_param::END_BLOCK, self.end_block)
            .with_optional(query_param::PAGE, self.page)
            .with_optional(query_param::OFFSET, self.offset)
            .with_optional(query_param::SORT, self.sort)
    }
}

/// Parameters of `txlist` and `txlistinternal` by address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionListRequest {
    pub address: String,
    pub pagination: Pagination,
}

impl TransactionListRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            pagination: Pagination::default(),
        }
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        self.pagination
            .append_to(QueryParams::new().with(query_param::ADDRESS, &self.address))
    }
}

/// Parameters of `tokentx` and `tokennfttx`.
///
/// Filter by account, by token contract, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTransferRequest {
    pub contract_address: Option<String>,
    pub address: Option<String>,
    pub pagination: Pagination,
}

impl TokenTransferRequest {
    /// Transfers to and from `address`.
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    /// Transfers of the token at `contract_address`.
    pub fn for_contract(contract_address: impl Into<String>) -> Self {
        Self {
            contract_address: Some(contract_address.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let params = QueryParams::new()
            .with_optional(query_param::CONTRACT_ADDRESS, self.contract_address.as_ref())
            .with_optional(query_param::ADDRESS, self.address.as_ref());
        self.pagination.append_to(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_list_keeps_parameter_order() {
        let params = TransactionListRequest::new("0xabc")
            .with_pagination(Pagination::default().blocks(0, 99_999_999).page(1, 10).sort(Sort::Desc))
            .to_params();

        let rendered: Vec<_> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        assert_eq!(
            rendered,
            vec![
                "address=0xabc",
                "startblock=0",
                "endblock=99999999",
                "page=1",
                "offset=10",
                "sort=desc",
            ]
        );
    }

    #[test]
    fn empty_pagination_sends_only_filters() {
        let params = TokenTransferRequest::for_contract("0xtoken").to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("contractaddress"), Some("0xtoken"));
        assert_eq!(params.get("address"), None);
    }
}
