pub mod adapter;
pub mod http;

pub use adapter::parse_child_plan;
pub use http::HttpRemotePlanner;

use crate::error::Result;
use crate::models::{Child, ChildLunchPlan, GroceryList};

/// A child's plan as produced by the remote planner, with its own shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteChildPlan {
    pub plan: ChildLunchPlan,
    pub grocery_list: GroceryList,
}

/// Remote meal-plan generator, called once per child.
#[cfg_attr(test, mockall::automock)]
pub trait RemotePlanner {
    fn generate_child_plan(&self, child: &Child, days: u32) -> Result<RemoteChildPlan>;
}
