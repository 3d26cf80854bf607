use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum ContentItem {
    Table,
    Id,
    ItemType,
    Title,
    Permalink,
}

#[derive(Iden, Clone)]
pub enum Comment {
    Table,
    Id,
    ContentItemId,
    ParentId,
    Author,
    AuthorEmail,
    Content,
    Date,
    DateGmt,
    Approval,
    OwnerId,
}
