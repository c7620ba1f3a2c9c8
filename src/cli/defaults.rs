use clap::Parser;
use spaarwijzer::profile::BusinessCategory;

use crate::tables::build_defaults_table;

#[derive(Parser)]
pub struct DefaultsArgs {
    /// Show only this category.
    #[clap(long)]
    category: Option<BusinessCategory>,
}

impl DefaultsArgs {
    pub fn run(self) {
        let categories = match self.category {
            Some(category) => vec![Some(category)],
            None => BusinessCategory::ALL.into_iter().map(Some).chain([None]).collect(),
        };
        println!("{}", build_defaults_table(&categories));
    }
}
