pub mod aggregate;
pub mod sale;

pub use aggregate::{
    DetailedTransaction, DetailedTransactionProduct, ImportExportRequest, Transaction,
    TransactionItem,
};
pub use sale::{sale_failure_message, NewSaleRequest, SaleCart, SaleItem, SaleLine};
