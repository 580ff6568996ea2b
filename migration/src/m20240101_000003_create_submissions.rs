use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskErrorReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskErrorReports::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TaskErrorReports::TaskId).uuid().not_null())
                    .col(
                        ColumnDef::new(TaskErrorReports::ErrorKind)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TaskErrorReports::Text).text().not_null())
                    .col(ColumnDef::new(TaskErrorReports::Code).text().not_null())
                    .col(
                        ColumnDef::new(TaskErrorReports::CreatedAt)
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
                    .name("idx_task_error_reports_task_id")
                    .table(TaskErrorReports::Table)
                    .col(TaskErrorReports::TaskId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CodeReviewCandidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CodeReviewCandidates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CodeReviewCandidates::SenderName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodeReviewCandidates::SenderContact)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodeReviewCandidates::ProblemStatement)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CodeReviewCandidates::Code).text().not_null())
                    .col(
                        ColumnDef::new(CodeReviewCandidates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CodeReviews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CodeReviews::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(CodeReviews::UrlPathComponent)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CodeReviews::MetaTitle).string_len(256).not_null())
                    .col(
                        ColumnDef::new(CodeReviews::MetaDescription)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodeReviews::MetaKeywords)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CodeReviews::SenderName).string_len(256).not_null())
                    .col(ColumnDef::new(CodeReviews::ProblemStatement).text().not_null())
                    .col(ColumnDef::new(CodeReviews::Code).text().not_null())
                    .col(ColumnDef::new(CodeReviews::ReviewMarkup).text().not_null())
                    .col(
                        ColumnDef::new(CodeReviews::CreatedAt)
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
                    .name("idx_code_reviews_url_path_component")
                    .table(CodeReviews::Table)
                    .col(CodeReviews::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CodeReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CodeReviewCandidates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TaskErrorReports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TaskErrorReports {
    Table,
    Id,
    TaskId,
    ErrorKind,
    Text,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CodeReviewCandidates {
    Table,
    Id,
    SenderName,
    SenderContact,
    ProblemStatement,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CodeReviews {
    Table,
    Id,
    UrlPathComponent,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    SenderName,
    ProblemStatement,
    Code,
    ReviewMarkup,
    CreatedAt,
}
