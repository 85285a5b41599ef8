//! Atom records extracted from a parsed structure.

use nalgebra::Vector3;
use pdbtbx::*;
use tracing::debug;

/// One input atom. Records are built once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom type symbol used for the radius lookup (usually the element)
    pub symbol: String,
    /// Cartesian position in Å
    pub position: Vector3<f64>,
    /// Segment identifier (chain of the structure file)
    pub segid: String,
    /// Residue name
    pub resn: String,
    /// Residue serial number
    pub resi: isize,
    /// Atom name
    pub atomn: String,
    /// Atom serial number
    pub atomi: usize,
}

impl Atom {
    /// Atom without residue annotations, handy for synthetic systems.
    pub fn new(symbol: &str, position: Vector3<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
            segid: String::new(),
            resn: String::new(),
            resi: 0,
            atomn: symbol.to_string(),
            atomi: 0,
        }
    }

    fn from_hier(x: &AtomConformerResidueChainModel) -> Self {
        let pos = x.atom().pos();
        Self {
            symbol: atom_symbol(x.atom(), x.residue().name().unwrap_or_default()),
            position: Vector3::new(pos.0, pos.1, pos.2),
            segid: x.chain().id().to_string(),
            resn: x.residue().name().unwrap_or_default().to_string(),
            resi: x.residue().serial_number(),
            atomn: x.atom().name().to_string(),
            atomi: x.atom().serial_number(),
        }
    }
}

/// Element symbol of the atom, or one guessed from its name when the element
/// column is blank.
fn atom_symbol(atom: &pdbtbx::Atom, resn: &str) -> String {
    match atom.element() {
        Some(e) => e.symbol().to_string(),
        None => symbol_from_name(atom.name(), resn),
    }
}

/// Guess the element from the leading letters of an atom name.
///
/// Two-letter elements are only taken when the atom name matches the residue
/// name, as for ions (`FE` in `FE`, `CL` in `CL`). Otherwise `CA` of an amino
/// acid would read as calcium, so the first letter wins.
fn symbol_from_name(name: &str, resn: &str) -> String {
    let letters: String = name
        .trim()
        .chars()
        .skip_while(|c| c.is_ascii_digit())
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_uppercase();

    if letters.len() == 2 && letters.eq_ignore_ascii_case(resn.trim()) {
        if let Some(e) = Element::from_symbol(&letters) {
            return e.symbol().to_string();
        }
    }
    letters.chars().next().map(String::from).unwrap_or_default()
}

/// Collect the atoms of one model in file order.
///
/// `model_num` of 0 selects the first model of the file.
pub fn atoms_from_pdb(pdb: &PDB, model_num: usize) -> Vec<Atom> {
    // If model_num is 0, we use the first model; otherwise use the specified model
    let model_num = if model_num == 0 {
        pdb.models().next().map_or(0, |m| m.serial_number())
    } else {
        model_num
    };

    let atoms = pdb
        .atoms_with_hierarchy()
        .filter(|x| x.model().serial_number() == model_num)
        .map(|x| Atom::from_hier(&x))
        .collect::<Vec<Atom>>();
    debug!("Collected {} atoms from model {model_num}", atoms.len());
    atoms
}
