//! The reference dataset: 3 topics, 4 users, 12 articles, 18 comments.
//!
//! Counts worth knowing when asserting: 11 of 12 articles are about `mitch`,
//! `paper` has none, article 1 has 11 comments and 100 votes, article 2 has
//! no comments. The next comment id is 19.

use chrono::{DateTime, TimeZone, Utc};
use news_data::{ArticleRecord, Comment, SeedData, Topic, User};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: slug.into(),
        description: description.into(),
    }
}

fn user(username: &str, name: &str, avatar_url: &str) -> User {
    User {
        username: username.into(),
        name: name.into(),
        avatar_url: avatar_url.into(),
    }
}

fn article(
    article_id: i32,
    title: &str,
    topic: &str,
    author: &str,
    body: &str,
    created_at: DateTime<Utc>,
    votes: i32,
) -> ArticleRecord {
    ArticleRecord {
        article_id,
        title: title.into(),
        topic: topic.into(),
        author: author.into(),
        body: body.into(),
        created_at,
        votes,
    }
}

fn comment(
    comment_id: i32,
    article_id: i32,
    author: &str,
    votes: i32,
    created_at: DateTime<Utc>,
    body: &str,
) -> Comment {
    Comment {
        comment_id,
        article_id,
        author: author.into(),
        body: body.into(),
        votes,
        created_at,
    }
}

pub fn topics() -> Vec<Topic> {
    vec![
        topic("mitch", "The man, the Mitch, the legend"),
        topic("cats", "Not dogs"),
        topic("paper", "what books are made of"),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "butter_bridge",
            "jonny",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        ),
        user(
            "icellusedkars",
            "sam",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        ),
        user(
            "rogersop",
            "paul",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        ),
        user(
            "lurker",
            "do_nothing",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        ),
    ]
}

pub fn articles() -> Vec<ArticleRecord> {
    vec![
        article(1, "Living in the shadow of a great man", "mitch", "butter_bridge",
            "I find this existence challenging", at(2020, 7, 9, 20, 11), 100),
        article(2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars",
            "Call me Mitchell. Some years ago, never mind how long precisely, having little or no \
             money in my purse, and nothing particular to interest me on shore, I thought I would \
             buy a laptop about a little and see the codey part of the world.",
            at(2020, 10, 16, 5, 3), 0),
        article(3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars",
            "some gifs", at(2020, 11, 3, 9, 12), 0),
        article(4, "Student SUES Mitch!", "mitch", "rogersop",
            "We all love Mitch and his wonderful, unique typing style. However, the volume of his \
             typing has ALLEGEDLY burst another students eardrums, and they are now suing for damages",
            at(2020, 5, 6, 1, 14), 0),
        article(5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop",
            "Bastet walks amongst us, and the cats are taking arms!", at(2020, 8, 3, 13, 14), 0),
        article(6, "A", "mitch", "icellusedkars", "Delicious tin of cat food",
            at(2020, 10, 18, 1, 0), 0),
        article(7, "Z", "mitch", "icellusedkars", "I was hungry.", at(2020, 1, 7, 14, 8), 0),
        article(8, "Does Mitch predate civilisation?", "mitch", "icellusedkars",
            "Archaeologists have uncovered a gigantic statue from the dawn of humanity, and it has \
             an uncanny resemblance to Mitch. Surely I am not the only person who can see this?!",
            at(2020, 4, 17, 1, 8), 0),
        article(9, "They're not exactly dogs, are they?", "mitch", "butter_bridge",
            "Well? Think about it.", at(2020, 6, 6, 9, 10), 0),
        article(10, "Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop",
            "Who are we kidding, there is only one, and it's Mitch!", at(2020, 5, 14, 4, 15), 0),
        article(11, "Am I a cat?", "mitch", "icellusedkars",
            "Having run out of ideas for articles, I am staring at the wall blankly, like a cat. \
             Does this make me a cat?",
            at(2020, 1, 15, 22, 21), 0),
        article(12, "Moustache", "mitch", "butter_bridge", "Have you seen the size of that thing?",
            at(2020, 10, 11, 11, 24), 0),
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment(1, 9, "butter_bridge", 16, at(2020, 4, 6, 12, 17),
            "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!"),
        comment(2, 1, "butter_bridge", 14, at(2020, 10, 31, 3, 3),
            "The beautiful thing about treasure is that it exists. Got to find out what kind of \
             sheets these are; not cotton, not rayon, silky."),
        comment(3, 1, "icellusedkars", 100, at(2020, 3, 1, 1, 13),
            "Replacing the quiet elegance of the dark suit and tie with the casual indifference of \
             these muted earth tones is a form of fashion suicide, but, uh, call me crazy - onyou \
             it works."),
        comment(4, 1, "icellusedkars", -100, at(2020, 2, 23, 12, 1),
            " I carry a log - yes. Is it funny to you? It is not to me."),
        comment(5, 1, "icellusedkars", 0, at(2020, 11, 3, 21, 0), "I hate streaming noses"),
        comment(6, 1, "icellusedkars", 0, at(2020, 4, 11, 21, 2), "I hate streaming eyes even more"),
        comment(7, 1, "icellusedkars", 0, at(2020, 5, 15, 20, 19), "Lobster pot"),
        comment(8, 1, "icellusedkars", 0, at(2020, 4, 14, 20, 19), "Delicious crackerbreads"),
        comment(9, 1, "icellusedkars", 0, at(2020, 1, 1, 3, 8), "Superficially charming"),
        comment(10, 3, "icellusedkars", 0, at(2020, 6, 20, 7, 24), "git push origin master"),
        comment(11, 3, "icellusedkars", 0, at(2020, 9, 19, 23, 10), "Ambidextrous marsupial"),
        comment(12, 1, "icellusedkars", 0, at(2020, 3, 2, 7, 10),
            "Massive intercranial brain haemorrhage"),
        comment(13, 1, "icellusedkars", 0, at(2020, 6, 15, 10, 25), "Fruit pastilles"),
        comment(14, 5, "icellusedkars", 16, at(2020, 6, 9, 5, 0),
            "What do you see? I have no idea where this will lead us. This place I speak of, is \
             known as the Black Lodge."),
        comment(15, 5, "butter_bridge", 1, at(2020, 11, 24, 0, 8),
            "I am 100% sure that we're not completely sure."),
        comment(16, 6, "butter_bridge", 1, at(2020, 10, 11, 15, 23), "This is a bad article name"),
        comment(17, 9, "icellusedkars", 20, at(2020, 3, 14, 17, 2), "The owls are not what they seem."),
        comment(18, 1, "butter_bridge", 16, at(2020, 7, 21, 0, 20),
            "This morning, I showered for nine minutes."),
    ]
}

/// The full dataset.
pub fn test_data() -> SeedData {
    SeedData {
        topics: topics(),
        users: users(),
        articles: articles(),
        comments: comments(),
    }
}
