use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000001_create_users_table::User,
    m20260815_000002_create_item_requests_table::ItemRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Item::Id))
                    .col(string(Item::Name))
                    .col(text(Item::Description))
                    .col(boolean(Item::Available))
                    .col(big_integer(Item::OwnerId))
                    .col(big_integer_null(Item::RequestId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_owner_id")
                            .from(Item::Table, Item::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_request_id")
                            .from(Item::Table, Item::RequestId)
                            .to(ItemRequest::Table, ItemRequest::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    Name,
    Description,
    Available,
    OwnerId,
    RequestId,
}
