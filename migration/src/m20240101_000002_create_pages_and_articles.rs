use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pages::Id).uuid().not_null().primary_key())
                    // The root page uses an empty component
                    .col(ColumnDef::new(Pages::UrlPathComponent).string_len(64).not_null())
                    .col(ColumnDef::new(Pages::LinkText).string_len(256).not_null())
                    .col(ColumnDef::new(Pages::MetaTitle).string_len(256).not_null())
                    .col(ColumnDef::new(Pages::MetaDescription).string_len(256).not_null())
                    .col(ColumnDef::new(Pages::MetaKeywords).string_len(256).not_null())
                    .col(ColumnDef::new(Pages::Heading).string_len(256).not_null())
                    .col(ColumnDef::new(Pages::BodyMarkup).text().not_null())
                    .col(ColumnDef::new(Pages::HeadMarkup).text().not_null())
                    .col(ColumnDef::new(Pages::BeforeBodyEndMarkup).text().not_null())
                    .col(
                        ColumnDef::new(Pages::Magic)
                            .string_len(20)
                            .not_null()
                            .default("generic"),
                    )
                    .col(ColumnDef::new(Pages::SortIndex).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Pages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Pages::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pages_url_path_component")
                    .table(Pages::Table)
                    .col(Pages::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Articles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Articles::LinkText).string_len(256).not_null())
                    .col(ColumnDef::new(Articles::UrlPathComponent).string_len(64).not_null())
                    .col(ColumnDef::new(Articles::MetaTitle).string_len(256).not_null())
                    .col(ColumnDef::new(Articles::MetaDescription).string_len(256).not_null())
                    .col(ColumnDef::new(Articles::MetaKeywords).string_len(256).not_null())
                    .col(ColumnDef::new(Articles::Heading).string_len(256).not_null())
                    .col(ColumnDef::new(Articles::BodyMarkup).text().not_null())
                    .col(ColumnDef::new(Articles::SortIndex).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Articles::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Articles::VkPostId)
                            .string_len(64)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Articles::VkPostHash)
                            .string_len(64)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Articles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Articles::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_url_path_component")
                    .table(Articles::Table)
                    .col(Articles::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_published_sort_index")
                    .table(Articles::Table)
                    .col(Articles::Published)
                    .col(Articles::SortIndex)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pages {
    Table,
    Id,
    UrlPathComponent,
    LinkText,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Heading,
    BodyMarkup,
    HeadMarkup,
    BeforeBodyEndMarkup,
    Magic,
    SortIndex,
    CreatedAt,
    LastModified,
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    LinkText,
    UrlPathComponent,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Heading,
    BodyMarkup,
    SortIndex,
    Published,
    VkPostId,
    VkPostHash,
    CreatedAt,
    LastModified,
}
