use utoipa::OpenApi;

use crate::api::{favoritos, personajes, planetas, sitemap, usuarios};
use crate::models::{Character, Favorite, Planet, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        // Personajes
        personajes::get_personajes,
        personajes::get_personaje,
        // Planetas
        planetas::get_planetas,
        planetas::get_planeta,
        // Usuarios
        usuarios::get_usuarios,
        usuarios::get_favoritos,
        // Favoritos
        favoritos::add_favorito,
        favoritos::del_favorito,
    ),
    components(
        schemas(
            Character,
            Planet,
            User,
            Favorite,
            favoritos::AddFavoritoDto,
            sitemap::Sitemap,
            sitemap::Endpoint,
        )
    ),
    tags(
        (name = "Personajes", description = "Read-only character catalogue"),
        (name = "Planetas", description = "Read-only planet catalogue"),
        (name = "Usuarios", description = "Users and their favorites"),
        (name = "Favoritos", description = "Favorite management"),
        (name = "Sitemap", description = "Route listing")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/personaje",
            "/personaje/{personaje_id}",
            "/planeta",
            "/planeta/{planeta_id}",
            "/usuario",
            "/usuario/{usuario_id}/favoritos",
            "/add_favoritos/{usuario_id}",
            "/del_favoritos/{favoritos_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "undocumented {}", path);
        }
    }
}
