// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use javanese::infrastructure::database::entities::sea_orm_active_enums::SeaPageMagic;
use javanese::infrastructure::database::entities::{article, chapter, course, lesson, page, task};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

pub async fn page(db: &DatabaseConnection, slug: &str, magic: SeaPageMagic, sort_index: i32) -> Uuid {
    let id = Uuid::new_v4();
    page::ActiveModel {
        id: Set(id),
        url_path_component: Set(slug.to_string()),
        link_text: Set(format!("{} link", slug)),
        meta_title: Set(format!("{} title", slug)),
        meta_description: Set(format!("{} description", slug)),
        meta_keywords: Set(String::new()),
        heading: Set(format!("{} heading", slug)),
        body_markup: Set(format!("<p>{} body</p>", slug)),
        head_markup: Set(String::new()),
        before_body_end_markup: Set(String::new()),
        magic: Set(magic),
        sort_index: Set(sort_index),
        created_at: Set(Utc::now().into()),
        last_modified: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed page");
    id
}

pub async fn article(db: &DatabaseConnection, slug: &str, published: bool, sort_index: i32) -> Uuid {
    let id = Uuid::new_v4();
    article::ActiveModel {
        id: Set(id),
        link_text: Set(format!("{} link", slug)),
        url_path_component: Set(slug.to_string()),
        meta_title: Set(format!("{} title", slug)),
        meta_description: Set(format!("{} description", slug)),
        meta_keywords: Set(String::new()),
        heading: Set(format!("{} heading", slug)),
        body_markup: Set(format!("<p>{} body</p>", slug)),
        sort_index: Set(sort_index),
        published: Set(published),
        vk_post_id: Set(String::new()),
        vk_post_hash: Set(String::new()),
        created_at: Set(Utc::now().into()),
        last_modified: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed article");
    id
}

pub async fn course(db: &DatabaseConnection, slug: &str, sort_index: i32) -> Uuid {
    let id = Uuid::new_v4();
    course::ActiveModel {
        id: Set(id),
        link_text: Set(format!("{} link", slug)),
        url_path_component: Set(slug.to_string()),
        meta_title: Set(format!("{} title", slug)),
        meta_description: Set(String::new()),
        meta_keywords: Set(String::new()),
        heading: Set(format!("{} heading", slug)),
        description: Set(format!("<p>{} description</p>", slug)),
        sort_index: Set(sort_index),
        created_at: Set(Utc::now().into()),
        last_modified: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed course");
    id
}

pub async fn chapter(db: &DatabaseConnection, course_id: Uuid, slug: &str, sort_index: i32) -> Uuid {
    let id = Uuid::new_v4();
    chapter::ActiveModel {
        id: Set(id),
        course_id: Set(course_id),
        link_text: Set(format!("{} link", slug)),
        url_path_component: Set(slug.to_string()),
        meta_title: Set(format!("{} title", slug)),
        meta_description: Set(String::new()),
        meta_keywords: Set(String::new()),
        heading: Set(format!("{} heading", slug)),
        description: Set(format!("<p>{} description</p>", slug)),
        sort_index: Set(sort_index),
        created_at: Set(Utc::now().into()),
        last_modified: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed chapter");
    id
}

pub async fn lesson(db: &DatabaseConnection, chapter_id: Uuid, slug: &str, sort_index: i32) -> Uuid {
    let id = Uuid::new_v4();
    lesson::ActiveModel {
        id: Set(id),
        chapter_id: Set(chapter_id),
        link_text: Set(format!("{} link", slug)),
        url_path_component: Set(slug.to_string()),
        meta_title: Set(format!("{} title", slug)),
        meta_description: Set(String::new()),
        meta_keywords: Set(String::new()),
        heading: Set(format!("{} heading", slug)),
        body_markup: Set(format!("<p>{} body</p>", slug)),
        sort_index: Set(sort_index),
        created_at: Set(Utc::now().into()),
        last_modified: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed lesson");
    id
}

pub async fn task(db: &DatabaseConnection, lesson_id: Uuid, slug: &str, sort_index: i32) -> Uuid {
    let id = Uuid::new_v4();
    task::ActiveModel {
        id: Set(id),
        lesson_id: Set(lesson_id),
        link_text: Set(format!("{} link", slug)),
        url_path_component: Set(slug.to_string()),
        heading: Set(format!("{} heading", slug)),
        condition: Set(format!("<p>{} condition</p>", slug)),
        initial_code: Set("print(1 < 2)".to_string()),
        code_to_append: Set(String::new()),
        check_rules: Set(String::new()),
        expected_output: Set("True".to_string()),
        sort_index: Set(sort_index),
        created_at: Set(Utc::now().into()),
        last_modified: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed task");
    id
}

/// 常用站点内容
#[allow(dead_code)]
pub struct Site {
    pub python: Uuid,
    pub java: Uuid,
    pub basics: Uuid,
    pub loops: Uuid,
    pub functions: Uuid,
    pub while_lesson: Uuid,
    pub for_lesson: Uuid,
    pub count_up: Uuid,
}

/// 首页、课程树页、博客页，两门课程，python 下三个章节
pub async fn site(db: &DatabaseConnection) -> Site {
    page(db, "", SeaPageMagic::Index, 0).await;
    page(db, "courses", SeaPageMagic::Tree, 1).await;
    page(db, "blog", SeaPageMagic::Articles, 2).await;
    page(db, "about", SeaPageMagic::Generic, 3).await;

    article(db, "my-post", true, 1).await;
    article(db, "draft", false, 2).await;

    let python = course(db, "python", 1).await;
    let java = course(db, "java", 2).await;
    let basics = chapter(db, python, "basics", 1).await;
    let loops = chapter(db, python, "loops", 2).await;
    let functions = chapter(db, python, "functions", 3).await;
    chapter(db, java, "streams", 1).await;
    let while_lesson = lesson(db, loops, "while", 1).await;
    let for_lesson = lesson(db, loops, "for", 2).await;
    let count_up = task(db, while_lesson, "count-up", 1).await;

    Site {
        python,
        java,
        basics,
        loops,
        functions,
        while_lesson,
        for_lesson,
        count_up,
    }
}
