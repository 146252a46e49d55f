pub mod download_entry_row;
