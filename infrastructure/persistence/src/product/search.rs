use sqlx::{Postgres, QueryBuilder};

use business::domain::product::query::ProductSearch;

pub(crate) const PRODUCT_COLUMNS: &str = "id, name, description, price_configuration, attributes, \
     tenant_id, category_id, is_publish, image, created_at, updated_at";

/// Counts every product matching the search, ignoring pagination.
pub fn count_query(search: &ProductSearch) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_conditions(&mut builder, search);
    builder
}

/// Selects one page of matches, newest first.
pub fn page_query(search: &ProductSearch) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
    push_conditions(&mut builder, search);
    builder.push(" ORDER BY created_at DESC LIMIT ");
    builder.push_bind(i64::from(search.pagination.limit));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(search.pagination.offset()).unwrap_or(i64::MAX));
    builder
}

fn push_conditions(builder: &mut QueryBuilder<'static, Postgres>, search: &ProductSearch) {
    builder.push(" WHERE TRUE");

    if let Some(q) = &search.q {
        builder.push(" AND name ILIKE ");
        builder.push_bind(format!("%{}%", escape_like(q)));
    }
    if let Some(tenant_id) = &search.filter.tenant_id {
        builder.push(" AND tenant_id = ");
        builder.push_bind(tenant_id.as_str().to_string());
    }
    if let Some(category_id) = search.filter.category_id {
        builder.push(" AND category_id = ");
        builder.push_bind(category_id);
    }
    if let Some(is_publish) = search.filter.is_publish {
        builder.push(" AND is_publish = ");
        builder.push_bind(is_publish);
    }
}

/// Makes the search term match literally inside a LIKE pattern.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::query::{Pagination, ProductFilter};
    use uuid::Uuid;

    #[test]
    fn should_count_everything_without_filters() {
        let builder = count_query(&ProductSearch::default());
        assert_eq!(builder.sql(), "SELECT COUNT(*) FROM products WHERE TRUE");
    }

    #[test]
    fn should_combine_all_filters() {
        let search = ProductSearch::new(
            Some("pizza".to_string()),
            ProductFilter::from_query(
                Some("5".to_string()),
                Some(Uuid::new_v4().to_string()),
                Some("true".to_string()),
            ),
            Pagination::default(),
        );

        let builder = count_query(&search);

        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM products WHERE TRUE AND name ILIKE $1 AND tenant_id = $2 \
             AND category_id = $3 AND is_publish = $4"
        );
    }

    #[test]
    fn should_page_newest_first() {
        let search = ProductSearch::new(
            None,
            ProductFilter::from_query(Some("5".to_string()), None, None),
            Pagination { page: 2, limit: 10 },
        );

        let builder = page_query(&search);

        assert_eq!(
            builder.sql(),
            format!(
                "SELECT {} FROM products WHERE TRUE AND tenant_id = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                PRODUCT_COLUMNS
            )
        );
    }

    #[test]
    fn should_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
