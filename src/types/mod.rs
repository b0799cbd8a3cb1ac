pub mod contract_data;
