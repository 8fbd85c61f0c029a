//! Demo data used when no data file is configured

use super::Record;
use crate::types::{Community, Post};

fn community(id: &str, title: &str, description: &str, country: &str, tags: &[&str], created_at: u64) -> Community {
    Community {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        country: Some(country.to_string()),
        language: Some("zh".to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_by: None,
        created_at,
    }
}

fn post(
    id: &str,
    community_id: &str,
    title: &str,
    body: &str,
    tags: &[&str],
    category: &str,
    created_at: u64,
) -> Post {
    Post {
        id: id.to_string(),
        community_id: community_id.to_string(),
        author_id: "demo".to_string(),
        title: title.to_string(),
        body: body.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: Some(category.to_string()),
        created_at,
    }
}

/// Three communities and three posts for local development
pub fn demo_records() -> Vec<Record> {
    vec![
        Record::Community(community(
            "community-th",
            "中国人在泰国留学",
            "分享签证、租房、美食攻略等信息",
            "Thailand",
            &["签证", "美食", "租房"],
            1_700_000_000_000,
        )),
        Record::Community(community(
            "community-kr",
            "英国人在韩国留学",
            "学校申请、课程选择、生活分享",
            "South Korea",
            &["课程", "生活", "语言"],
            1_700_000_001_000,
        )),
        Record::Community(community(
            "community-cn",
            "泰国人在中国留学",
            "适应中国生活、二手交易、语言互助",
            "China",
            &["二手", "语言", "互助"],
            1_700_000_002_000,
        )),
        Record::Post(post(
            "post-bangkok-housing",
            "community-th",
            "曼谷租房攻略",
            "推荐在 BTS 线附近找公寓，注意提前准备押金，和房东确认水电费用。",
            &["租房", "曼谷"],
            "生活",
            1_700_000_010_000,
        )),
        Record::Post(post(
            "post-yonsei-courses",
            "community-kr",
            "延世大学选课技巧",
            "热门课程要抢先注册，建议提前收藏课程。语言课和专业课都要合理搭配。",
            &["课程", "选课"],
            "学习",
            1_700_000_011_000,
        )),
        Record::Post(post(
            "post-shanghai-thai-food",
            "community-cn",
            "上海哪里吃泰餐",
            "静安寺附近有很多泰国餐厅，想家时可以去吃。也欢迎大家一起组局做饭！",
            &["美食", "聚会"],
            "社交",
            1_700_000_012_000,
        )),
    ]
}
