use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    TurnNumber,
    IsRunning,
    IsArchived,
    ChannelId,
    ThreadId,
    ResetCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
    ExternalId,
    InitiatedPrivateChat,
    CreatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    GameId,
    PersonId,
    DisplayName,
    Username,
    HasSpoken,
    IsDm,
    CreatedAt,
}

#[derive(Iden)]
enum Messages {
    Table,
    Id,
    ExternalId,
    GameId,
    TurnNo,
    PlayerId,
    Text,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::TurnNumber).integer().not_null())
                    .col(ColumnDef::new(Games::IsRunning).boolean().not_null())
                    .col(ColumnDef::new(Games::IsArchived).boolean().not_null())
                    .col(ColumnDef::new(Games::ChannelId).big_integer().not_null())
                    .col(ColumnDef::new(Games::ThreadId).integer().not_null())
                    .col(ColumnDef::new(Games::ResetCode).string().null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path for the single non-archived game per (channel, thread).
        manager
            .create_index(
                Index::create()
                    .name("ix_games_channel_thread")
                    .table(Games::Table)
                    .col(Games::ChannelId)
                    .col(Games::ThreadId)
                    .col(Games::IsArchived)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::ExternalId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Persons::InitiatedPrivateChat)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Persons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_persons_external_id")
                    .table(Persons::Table)
                    .col(Persons::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Players::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Players::PersonId).big_integer().not_null())
                    .col(ColumnDef::new(Players::DisplayName).string().not_null())
                    .col(ColumnDef::new(Players::Username).string().null())
                    .col(ColumnDef::new(Players::HasSpoken).boolean().not_null())
                    .col(ColumnDef::new(Players::IsDm).boolean().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_person")
                            .from(Players::Table, Players::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One player per (game, person).
        manager
            .create_index(
                Index::create()
                    .name("ux_players_game_person")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .col(Players::PersonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Messages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Messages::ExternalId).big_integer().not_null())
                    .col(ColumnDef::new(Messages::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Messages::TurnNo).integer().not_null())
                    .col(ColumnDef::new(Messages::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(Messages::Text).text().not_null())
                    .col(
                        ColumnDef::new(Messages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_game")
                            .from(Messages::Table, Messages::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_player")
                            .from(Messages::Table, Messages::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One recorded utterance per (game, turn, player).
        manager
            .create_index(
                Index::create()
                    .name("ux_messages_game_turn_player")
                    .table(Messages::Table)
                    .col(Messages::GameId)
                    .col(Messages::TurnNo)
                    .col(Messages::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Edit lookups resolve by the transport's message id.
        manager
            .create_index(
                Index::create()
                    .name("ix_messages_game_external")
                    .table(Messages::Table)
                    .col(Messages::GameId)
                    .col(Messages::ExternalId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        Ok(())
    }
}
