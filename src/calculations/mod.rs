pub mod backward_pass;
pub mod forward_pass;
