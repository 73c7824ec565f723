// src/noyau/reglages.rs
//
// Réglages partagés par le parser ET le rendu canonique.
// Les deux DOIVENT utiliser les mêmes réglages, sinon l’aller-retour
// texte -> arbre -> texte -> arbre n’est plus garanti.

use super::jetons::Op;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Associativite {
    /// a ** b ** c = (a ** b) ** c
    Gauche,
    /// a ** b ** c = a ** (b ** c)
    #[default]
    Droite,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    /// Associativité de `**` (les autres opérateurs sont associatifs à gauche).
    pub puissance: Associativite,
}

impl Reglages {
    pub fn avec_puissance(puissance: Associativite) -> Self {
        Self { puissance }
    }

    pub fn associatif_droite(&self, op: Op) -> bool {
        op == Op::Pow && self.puissance == Associativite::Droite
    }
}
