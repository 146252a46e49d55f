pub mod search_input_top_bar;
pub mod search_facets;
pub mod search_result_grid;
pub mod search_result_item_card;
