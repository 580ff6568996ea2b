// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{seed, test_db};
use javanese::domain::models::page::PageMagic;
use javanese::domain::models::task_error_report::{TaskErrorKind, TaskErrorReport};
use javanese::infrastructure::database::entities::sea_orm_active_enums::SeaPageMagic;
use javanese::infrastructure::repositories::content_repositories;

#[tokio::test]
async fn test_pages_by_component_and_magic() {
    let db = test_db().await;
    seed::site(&db).await;
    let repos = content_repositories(db);

    let index = repos.pages.find_by_url_component("").await.unwrap().unwrap();
    assert_eq!(index.magic, PageMagic::Index);
    assert!(repos.pages.find_by_url_component("nope").await.unwrap().is_none());

    let articles = repos.pages.find_by_magic(PageMagic::Articles).await.unwrap().unwrap();
    assert_eq!(articles.url_path_component, "blog");

    let all = repos.pages.find_all_order_by_sort_index().await.unwrap();
    let slugs: Vec<&str> = all.iter().map(|p| p.url_path_component.as_str()).collect();
    assert_eq!(slugs, vec!["", "courses", "blog", "about"]);
}

#[tokio::test]
async fn test_find_by_magic_prefers_lowest_sort_index() {
    let db = test_db().await;
    seed::page(&db, "second-blog", SeaPageMagic::Articles, 5).await;
    seed::page(&db, "blog", SeaPageMagic::Articles, 1).await;
    let repos = content_repositories(db);

    let page = repos.pages.find_by_magic(PageMagic::Articles).await.unwrap().unwrap();
    assert_eq!(page.url_path_component, "blog");
    assert!(repos.pages.find_by_magic(PageMagic::Tree).await.unwrap().is_none());
}

#[tokio::test]
async fn test_article_listings_skip_drafts() {
    let db = test_db().await;
    seed::article(&db, "later", true, 3).await;
    seed::article(&db, "draft", false, 1).await;
    seed::article(&db, "first", true, 2).await;
    let repos = content_repositories(db);

    let full = repos
        .articles
        .find_all_published_order_by_sort_index()
        .await
        .unwrap();
    let slugs: Vec<&str> = full.iter().map(|a| a.url_path_component.as_str()).collect();
    assert_eq!(slugs, vec!["first", "later"]);
    assert!(full[0].vk_post.is_none());

    let basic = repos
        .articles
        .find_all_basic_published_order_by_sort_index()
        .await
        .unwrap();
    assert_eq!(basic.len(), 2);
    assert_eq!(basic[0].id, full[0].id);
    assert_eq!(basic[1].link_text, "later link");

    // 草稿仍可按路径片段查到
    let draft = repos.articles.find_by_url_component("draft").await.unwrap().unwrap();
    assert!(!draft.published);
}

#[tokio::test]
async fn test_chapters_are_scoped_to_course() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let repos = content_repositories(db);

    let loops = repos
        .chapters
        .find_by_url_component(site.python, "loops")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loops.id, site.loops);
    assert!(repos
        .chapters
        .find_by_url_component(site.java, "loops")
        .await
        .unwrap()
        .is_none());

    let course = repos.courses.find_by_url_component("python").await.unwrap().unwrap();
    assert_eq!(course.id, site.python);
}

#[tokio::test]
async fn test_tasks_and_reports() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    seed::task(&db, site.while_lesson, "count-down", 0).await;
    let repos = content_repositories(db);

    let tasks = repos
        .tasks
        .find_by_lesson_order_by_sort_index(site.while_lesson)
        .await
        .unwrap();
    let slugs: Vec<&str> = tasks.iter().map(|t| t.url_path_component.as_str()).collect();
    assert_eq!(slugs, vec!["count-down", "count-up"]);
    assert!(repos
        .tasks
        .find_by_lesson_order_by_sort_index(site.for_lesson)
        .await
        .unwrap()
        .is_empty());

    let report = TaskErrorReport::new(
        site.count_up,
        TaskErrorKind::WrongCheck,
        "accepts wrong answer".to_string(),
        "print(2)".to_string(),
    );
    let saved = repos.task_error_reports.create(&report).await.unwrap();
    assert_eq!(saved.id, report.id);

    let found = repos.task_error_reports.find_by_task(site.count_up).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].error_kind, TaskErrorKind::WrongCheck);
    assert_eq!(found[0].code, "print(2)");
}

#[tokio::test]
async fn test_code_reviews_by_component() {
    use chrono::{Duration, Utc};
    use javanese::infrastructure::database::entities::code_review;
    use sea_orm::{ActiveModelTrait, Set};
    use uuid::Uuid;

    let db = test_db().await;
    for (slug, age) in [("fizzbuzz", 2), ("linked-list", 1)] {
        code_review::ActiveModel {
            id: Set(Uuid::new_v4()),
            url_path_component: Set(slug.to_string()),
            meta_title: Set(format!("{} review", slug)),
            meta_description: Set(String::new()),
            meta_keywords: Set(String::new()),
            sender_name: Set("Ivan".to_string()),
            problem_statement: Set("print numbers".to_string()),
            code: Set("for i in range(10): print(i)".to_string()),
            review_markup: Set("<p>fine</p>".to_string()),
            created_at: Set((Utc::now() - Duration::days(age)).into()),
        }
        .insert(db.as_ref())
        .await
        .unwrap();
    }
    let repos = content_repositories(db);

    let review = repos
        .code_reviews
        .find_by_url_component("fizzbuzz")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(review.meta.title, "fizzbuzz review");
    assert_eq!(
        repos.code_reviews.find_by_id(review.id).await.unwrap().unwrap().id,
        review.id
    );
    assert!(repos
        .code_reviews
        .find_by_url_component("missing")
        .await
        .unwrap()
        .is_none());

    let all = repos.code_reviews.find_all_newest_first().await.unwrap();
    let slugs: Vec<&str> = all.iter().map(|r| r.url_path_component.as_str()).collect();
    assert_eq!(slugs, vec!["linked-list", "fizzbuzz"]);
}
