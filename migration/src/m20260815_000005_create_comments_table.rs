use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000001_create_users_table::User, m20260815_000003_create_items_table::Item,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Comment::Id))
                    .col(text(Comment::Text))
                    .col(big_integer(Comment::ItemId))
                    .col(big_integer(Comment::AuthorId))
                    .col(timestamp(Comment::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_item_id")
                            .from(Comment::Table, Comment::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_author_id")
                            .from(Comment::Table, Comment::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    Text,
    ItemId,
    AuthorId,
    Created,
}
