//! PostgreSQL Repository Implementations
//!
//! One repository type backs both catalog traits. Capital writes run
//! inside a transaction: siblings of the target country are demoted
//! first, then the insert or update lands, then commit. A crash between
//! the two statements rolls both back, so at most one capital per
//! country ever becomes visible.

use sqlx::PgPool;

use crate::domain::entities::{Ciudad, CiudadRecord, Pais, PaisRecord};
use crate::domain::repository::{CiudadRepository, NuevaCiudad, PaisRepository};
use crate::error::CatalogResult;
use kernel::id::{CiudadId, PaisId};

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PaisRow {
    id: i64,
    nombre: String,
    sigla: Option<String>,
}

impl PaisRow {
    fn into_pais(self) -> Pais {
        Pais {
            id: PaisId::new(self.id),
            nombre: self.nombre,
            sigla: self.sigla,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CiudadRow {
    id: i64,
    nombre: String,
    es_capital: bool,
    id_pais: i64,
}

impl CiudadRow {
    fn into_ciudad(self) -> Ciudad {
        Ciudad {
            id: CiudadId::new(self.id),
            nombre: self.nombre,
            es_capital: self.es_capital,
            id_pais: PaisId::new(self.id_pais),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CiudadJoinRow {
    id: i64,
    nombre: String,
    es_capital: bool,
    id_pais: i64,
    pais_nombre: String,
}

impl CiudadJoinRow {
    fn into_record(self) -> CiudadRecord {
        CiudadRecord {
            ciudad: Ciudad {
                id: CiudadId::new(self.id),
                nombre: self.nombre,
                es_capital: self.es_capital,
                id_pais: PaisId::new(self.id_pais),
            },
            pais_nombre: self.pais_nombre,
        }
    }
}

/// Group cities under their countries, preserving country order
fn assemble_records(paises: Vec<Pais>, ciudades: Vec<Ciudad>) -> Vec<PaisRecord> {
    let mut records: Vec<PaisRecord> = paises
        .into_iter()
        .map(|pais| PaisRecord {
            pais,
            ciudades: Vec::new(),
        })
        .collect();

    for ciudad in ciudades {
        if let Some(record) = records.iter_mut().find(|r| r.pais.id == ciudad.id_pais) {
            record.ciudades.push(ciudad);
        }
    }

    records
}

impl PaisRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<PaisRecord>> {
        let paises = sqlx::query_as::<_, PaisRow>(
            "SELECT id, nombre, sigla FROM paises ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let ciudades = sqlx::query_as::<_, CiudadRow>(
            "SELECT id, nombre, es_capital, id_pais FROM ciudades ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assemble_records(
            paises.into_iter().map(PaisRow::into_pais).collect(),
            ciudades.into_iter().map(CiudadRow::into_ciudad).collect(),
        ))
    }

    async fn find(&self, id: PaisId) -> CatalogResult<Option<PaisRecord>> {
        let row = sqlx::query_as::<_, PaisRow>(
            "SELECT id, nombre, sigla FROM paises WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let ciudades = sqlx::query_as::<_, CiudadRow>(
            "SELECT id, nombre, es_capital, id_pais FROM ciudades WHERE id_pais = $1 ORDER BY id",
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(PaisRecord {
            pais: row.into_pais(),
            ciudades: ciudades.into_iter().map(CiudadRow::into_ciudad).collect(),
        }))
    }

    async fn exists(&self, id: PaisId) -> CatalogResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM paises WHERE id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    async fn insert(&self, nombre: &str, sigla: Option<&str>) -> CatalogResult<Pais> {
        let row = sqlx::query_as::<_, PaisRow>(
            r#"
            INSERT INTO paises (nombre, sigla)
            VALUES ($1, $2)
            RETURNING id, nombre, sigla
            "#,
        )
        .bind(nombre)
        .bind(sigla)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_pais())
    }

    async fn update(&self, pais: &Pais) -> CatalogResult<()> {
        sqlx::query("UPDATE paises SET nombre = $1, sigla = $2 WHERE id = $3")
            .bind(&pais.nombre)
            .bind(&pais.sigla)
            .bind(pais.id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: PaisId) -> CatalogResult<()> {
        sqlx::query("DELETE FROM paises WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ciudad_count(&self, id: PaisId) -> CatalogResult<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM ciudades WHERE id_pais = $1")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}

impl CiudadRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<CiudadRecord>> {
        let rows = sqlx::query_as::<_, CiudadJoinRow>(
            r#"
            SELECT c.id, c.nombre, c.es_capital, c.id_pais, p.nombre AS pais_nombre
            FROM ciudades c
            JOIN paises p ON p.id = c.id_pais
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CiudadJoinRow::into_record).collect())
    }

    async fn find(&self, id: CiudadId) -> CatalogResult<Option<CiudadRecord>> {
        let row = sqlx::query_as::<_, CiudadJoinRow>(
            r#"
            SELECT c.id, c.nombre, c.es_capital, c.id_pais, p.nombre AS pais_nombre
            FROM ciudades c
            JOIN paises p ON p.id = c.id_pais
            WHERE c.id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CiudadJoinRow::into_record))
    }

    async fn insert(&self, nueva: &NuevaCiudad) -> CatalogResult<Ciudad> {
        let mut tx = self.pool.begin().await?;

        if nueva.es_capital {
            sqlx::query("UPDATE ciudades SET es_capital = FALSE WHERE id_pais = $1")
                .bind(nueva.id_pais.value())
                .execute(&mut *tx)
                .await?;
        }

        let row = sqlx::query_as::<_, CiudadRow>(
            r#"
            INSERT INTO ciudades (nombre, es_capital, id_pais)
            VALUES ($1, $2, $3)
            RETURNING id, nombre, es_capital, id_pais
            "#,
        )
        .bind(&nueva.nombre)
        .bind(nueva.es_capital)
        .bind(nueva.id_pais.value())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into_ciudad())
    }

    async fn update(&self, ciudad: &Ciudad) -> CatalogResult<()> {
        let mut tx = self.pool.begin().await?;

        if ciudad.es_capital {
            sqlx::query(
                "UPDATE ciudades SET es_capital = FALSE WHERE id_pais = $1 AND id <> $2",
            )
            .bind(ciudad.id_pais.value())
            .bind(ciudad.id.value())
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            "UPDATE ciudades SET nombre = $1, es_capital = $2, id_pais = $3 WHERE id = $4",
        )
        .bind(&ciudad.nombre)
        .bind(ciudad.es_capital)
        .bind(ciudad.id_pais.value())
        .bind(ciudad.id.value())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn delete(&self, id: CiudadId) -> CatalogResult<()> {
        sqlx::query("DELETE FROM ciudades WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn pais(id: i64, nombre: &str) -> Pais {
        Pais {
            id: Id::new(id),
            nombre: nombre.to_string(),
            sigla: None,
        }
    }

    fn ciudad(id: i64, nombre: &str, id_pais: i64) -> Ciudad {
        Ciudad {
            id: Id::new(id),
            nombre: nombre.to_string(),
            es_capital: false,
            id_pais: Id::new(id_pais),
        }
    }

    #[test]
    fn test_assemble_groups_by_country() {
        let records = assemble_records(
            vec![pais(1, "Paraguay"), pais(2, "Uruguay")],
            vec![
                ciudad(1, "Asunción", 1),
                ciudad(2, "Montevideo", 2),
                ciudad(3, "Luque", 1),
            ],
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ciudades.len(), 2);
        assert_eq!(records[1].ciudades.len(), 1);
        assert_eq!(records[1].ciudades[0].nombre, "Montevideo");
    }

    #[test]
    fn test_assemble_keeps_country_without_cities() {
        let records = assemble_records(vec![pais(1, "Paraguay")], vec![]);

        assert_eq!(records.len(), 1);
        assert!(records[0].ciudades.is_empty());
    }
}
