pub mod data_retriever;
pub mod riot_client;
