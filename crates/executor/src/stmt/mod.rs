mod create_table;
mod insert;
mod query;
