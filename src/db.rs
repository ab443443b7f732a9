use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    sea_query::{ColumnDef, Index, Table},
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
};

use crate::entities::{director, genre, movie};

pub async fn connect_and_prepare(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, sea_orm::DbErr> {
    let mut opts = ConnectOptions::new(database_url);
    // Pragmas are per connection.
    opts.max_connections(max_connections.max(1)).sqlx_logging(false).map_sqlx_sqlite_opts(
        |sqlite| {
            sqlite
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
        },
    );

    let db = Database::connect(opts).await?;

    create_tables(&db).await?;
    Ok(db)
}

/// Creates the catalog tables when they do not exist yet. Movie references are
/// left unconstrained so deleting a director or genre never fails.
async fn create_tables(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    let backend = db.get_database_backend();

    let named_tables = [
        Table::create()
            .table(director::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(director::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(director::Column::Name).string_len(255).not_null())
            .to_owned(),
        Table::create()
            .table(genre::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(genre::Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(genre::Column::Name).string_len(255).not_null())
            .to_owned(),
    ];
    for table in &named_tables {
        db.execute(backend.build(table)).await?;
    }

    let movies = Table::create()
        .table(movie::Entity)
        .if_not_exists()
        .col(ColumnDef::new(movie::Column::Id).integer().not_null().auto_increment().primary_key())
        .col(ColumnDef::new(movie::Column::Title).string_len(255).null())
        .col(ColumnDef::new(movie::Column::Description).string_len(255).null())
        .col(ColumnDef::new(movie::Column::Trailer).string_len(255).null())
        .col(ColumnDef::new(movie::Column::Year).integer().null())
        .col(ColumnDef::new(movie::Column::Rating).double().null())
        .col(ColumnDef::new(movie::Column::GenreId).integer().null())
        .col(ColumnDef::new(movie::Column::DirectorId).integer().null())
        .to_owned();
    db.execute(backend.build(&movies)).await?;

    let indexes = [
        Index::create()
            .name("idx_movie_genre_id")
            .table(movie::Entity)
            .col(movie::Column::GenreId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_movie_director_id")
            .table(movie::Entity)
            .col(movie::Column::DirectorId)
            .if_not_exists()
            .to_owned(),
    ];
    for index in &indexes {
        db.execute(backend.build(index)).await?;
    }

    Ok(())
}
