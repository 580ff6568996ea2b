use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::LinkText).string_len(256).not_null())
                    .col(ColumnDef::new(Courses::UrlPathComponent).string_len(64).not_null())
                    .col(ColumnDef::new(Courses::MetaTitle).string_len(256).not_null())
                    .col(ColumnDef::new(Courses::MetaDescription).string_len(256).not_null())
                    .col(ColumnDef::new(Courses::MetaKeywords).string_len(256).not_null())
                    .col(ColumnDef::new(Courses::Heading).string_len(256).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::SortIndex).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::LastModified)
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
                    .name("idx_courses_url_path_component")
                    .table(Courses::Table)
                    .col(Courses::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Chapters belong to exactly one course
        manager
            .create_table(
                Table::create()
                    .table(Chapters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chapters::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Chapters::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Chapters::LinkText).string_len(256).not_null())
                    .col(ColumnDef::new(Chapters::UrlPathComponent).string_len(64).not_null())
                    .col(ColumnDef::new(Chapters::MetaTitle).string_len(256).not_null())
                    .col(ColumnDef::new(Chapters::MetaDescription).string_len(256).not_null())
                    .col(ColumnDef::new(Chapters::MetaKeywords).string_len(256).not_null())
                    .col(ColumnDef::new(Chapters::Heading).string_len(256).not_null())
                    .col(ColumnDef::new(Chapters::Description).text().not_null())
                    .col(ColumnDef::new(Chapters::SortIndex).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Chapters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Chapters::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapters_course_id")
                            .from(Chapters::Table, Chapters::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chapters_course_url_path_component")
                    .table(Chapters::Table)
                    .col(Chapters::CourseId)
                    .col(Chapters::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lessons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lessons::ChapterId).uuid().not_null())
                    .col(ColumnDef::new(Lessons::LinkText).string_len(256).not_null())
                    .col(ColumnDef::new(Lessons::UrlPathComponent).string_len(64).not_null())
                    .col(ColumnDef::new(Lessons::MetaTitle).string_len(256).not_null())
                    .col(ColumnDef::new(Lessons::MetaDescription).string_len(256).not_null())
                    .col(ColumnDef::new(Lessons::MetaKeywords).string_len(256).not_null())
                    .col(ColumnDef::new(Lessons::Heading).string_len(256).not_null())
                    .col(ColumnDef::new(Lessons::BodyMarkup).text().not_null())
                    .col(ColumnDef::new(Lessons::SortIndex).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Lessons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Lessons::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lessons_chapter_id")
                            .from(Lessons::Table, Lessons::ChapterId)
                            .to(Chapters::Table, Chapters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lessons_chapter_url_path_component")
                    .table(Lessons::Table)
                    .col(Lessons::ChapterId)
                    .col(Lessons::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tasks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tasks::LessonId).uuid().not_null())
                    .col(ColumnDef::new(Tasks::LinkText).string_len(256).not_null())
                    .col(ColumnDef::new(Tasks::UrlPathComponent).string_len(64).not_null())
                    .col(ColumnDef::new(Tasks::Heading).string_len(256).not_null())
                    .col(ColumnDef::new(Tasks::Condition).text().not_null())
                    .col(ColumnDef::new(Tasks::InitialCode).text().not_null())
                    .col(ColumnDef::new(Tasks::CodeToAppend).text().not_null())
                    .col(ColumnDef::new(Tasks::CheckRules).text().not_null())
                    .col(ColumnDef::new(Tasks::ExpectedOutput).text().not_null())
                    .col(ColumnDef::new(Tasks::SortIndex).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Tasks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tasks::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_lesson_id")
                            .from(Tasks::Table, Tasks::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_lesson_url_path_component")
                    .table(Tasks::Table)
                    .col(Tasks::LessonId)
                    .col(Tasks::UrlPathComponent)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Chapters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    LinkText,
    UrlPathComponent,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Heading,
    Description,
    SortIndex,
    CreatedAt,
    LastModified,
}

#[derive(DeriveIden)]
enum Chapters {
    Table,
    Id,
    CourseId,
    LinkText,
    UrlPathComponent,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Heading,
    Description,
    SortIndex,
    CreatedAt,
    LastModified,
}

#[derive(DeriveIden)]
enum Lessons {
    Table,
    Id,
    ChapterId,
    LinkText,
    UrlPathComponent,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Heading,
    BodyMarkup,
    SortIndex,
    CreatedAt,
    LastModified,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    LessonId,
    LinkText,
    UrlPathComponent,
    Heading,
    Condition,
    InitialCode,
    CodeToAppend,
    CheckRules,
    ExpectedOutput,
    SortIndex,
    CreatedAt,
    LastModified,
}
