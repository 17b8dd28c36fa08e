use crate::algebra::{AsFloatT, FloatT, SettingsError};
use derive_builder::Builder;

/// Numerical thresholds for the [determinant](crate::algebra::Determinant)
/// and [Cholesky](crate::algebra::Cholesky) engines.
///
/// The defaults impose no tolerance at all: a determinant pivot is treated
/// as zero only when it is exactly zero, and a Cholesky pivot is rejected
/// only when it is not strictly positive.
///
/// ```
/// use densecore::algebra::*;
///
/// let settings = DenseSettingsBuilder::<f64>::default()
///     .pivot_tol(1e-12)
///     .build()
///     .unwrap();
/// assert_eq!(settings.min_pivot, 0.0);
/// ```

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct DenseSettings<T: FloatT> {
    ///determinant pivots with magnitude at or below this value are zero
    #[builder(default = "(0.).as_T()")]
    pub pivot_tol: T,

    ///Cholesky diagonal terms must be strictly greater than this value
    #[builder(default = "(0.).as_T()")]
    pub min_pivot: T,
}

impl<T> Default for DenseSettings<T>
where
    T: FloatT,
{
    fn default() -> DenseSettings<T> {
        DenseSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> DenseSettings<T>
where
    T: FloatT,
{
    /// Checks that every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_threshold("pivot_tol", self.pivot_tol)?;
        validate_threshold("min_pivot", self.min_pivot)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DenseSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DenseSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl<T> DenseSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any thresholds that have been explicitly set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(pivot_tol) = self.pivot_tol {
            validate_threshold("pivot_tol", pivot_tol)?;
        }
        if let Some(min_pivot) = self.min_pivot {
            validate_threshold("min_pivot", min_pivot)?;
        }
        Ok(())
    }
}

fn validate_threshold<T: FloatT>(field: &'static str, value: T) -> Result<(), SettingsError> {
    if !value.is_finite() || value < T::zero() {
        return Err(SettingsError::BadFieldValue(field));
    }
    Ok(())
}

#[test]
fn test_settings_defaults() {
    let settings = DenseSettings::<f64>::default();
    assert_eq!(settings.pivot_tol, 0.0);
    assert_eq!(settings.min_pivot, 0.0);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    // bad values should be rejected by the builder
    assert!(DenseSettingsBuilder::<f64>::default()
        .pivot_tol(-1.0)
        .build()
        .is_err());
    assert!(DenseSettingsBuilder::<f64>::default()
        .min_pivot(f64::NAN)
        .build()
        .is_err());

    // and by direct validation after modification
    let mut settings = DenseSettings::<f64>::default();
    settings.min_pivot = f64::INFINITY;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("min_pivot"))
    );
}
