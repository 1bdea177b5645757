use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::item::ItemFactory};

use crate::{data::item::ItemRepository, model::api::Page};
