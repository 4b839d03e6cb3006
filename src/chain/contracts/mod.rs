use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ILendingPoolAddressesProvider {
        function getLendingPool() external view returns (address);
        function getLendingPoolCore() external view returns (address payable);
        function getPriceOracle() external view returns (address);
    }
}

sol! {
    #[sol(rpc)]
    interface ILendingPool {
        function getUserReserveData(address _reserve, address _user)
            external
            view
            returns (
                uint256 currentATokenBalance,
                uint256 currentBorrowBalance,
                uint256 principalBorrowBalance,
                uint256 borrowRateMode,
                uint256 borrowRate,
                uint256 liquidityRate,
                uint256 originationFee,
                uint256 variableBorrowIndex,
                uint256 lastUpdateTimestamp,
                bool usageAsCollateralEnabled
            );
    }
}

sol! {
    #[sol(rpc)]
    interface IPriceOracle {
        function getAssetPrice(address _asset) external view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    interface IUniswapV2Router01 {
        function factory() external pure returns (address);
        function WETH() external pure returns (address);
    }
}

sol! {
    #[sol(rpc)]
    interface IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address pair);
    }
}

sol! {
    #[sol(rpc)]
    interface IUniswapV2Pair {
        function getReserves()
            external
            view
            returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }
}
